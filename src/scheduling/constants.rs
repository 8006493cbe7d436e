//! Canonical bounds and user-facing message strings for booking validation.

use super::RejectionReason;

pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 480;

// Configuration bounds mirrored by the settings DTO and the database
// check constraints.
#[allow(unused)]
pub const MIN_BUFFER_MINUTES: i32 = 0;
#[allow(unused)]
pub const MAX_BUFFER_MINUTES: i32 = 60;

#[allow(unused)]
pub const MIN_ADVANCE_BOOKING_HOURS: i32 = 0;
#[allow(unused)]
pub const MAX_ADVANCE_BOOKING_HOURS: i32 = 168;

#[allow(unused)]
pub const MIN_ADVANCE_BOOKING_DAYS: i32 = 1;
#[allow(unused)]
pub const MAX_ADVANCE_BOOKING_DAYS: i32 = 365;

/// One canonical message per rejection reason so every client renders the
/// same text.
pub fn message_for(reason: RejectionReason) -> &'static str {
    match reason {
        RejectionReason::InvalidInput => "Invalid booking request",
        RejectionReason::InvalidDuration => {
            "Appointment duration must be between 15 and 480 minutes"
        }
        RejectionReason::AppointmentInPast => "Appointment time must be in the future",
        RejectionReason::SameDayNotAllowed => {
            "Same-day booking is not available for this business"
        }
        RejectionReason::InsufficientAdvance => {
            "Appointment must be booked further in advance"
        }
        RejectionReason::ExcessiveAdvance => "Appointment is too far in the future",
        RejectionReason::Closed => "The business is closed on the selected date",
        RejectionReason::OutsideHours => "Appointment falls outside business hours",
        RejectionReason::TimeConflict => {
            "The selected time conflicts with an existing appointment"
        }
    }
}
