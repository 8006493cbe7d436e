//! Scheduling validation core.
//!
//! Pure, synchronous decision logic over an in-memory snapshot of a brand's
//! configuration and existing appointments. The persistence layer loads the
//! snapshot; nothing in here performs I/O or mutates state.

pub mod booking_window;
pub mod conflict;
pub mod constants;
pub mod hours;
pub mod validator;

use serde::{Deserialize, Serialize};

use crate::db::models::{Appointment, AppointmentSettings, BusinessHours, SpecialHours};

pub use self::validator::{validate_appointment, BookingRequest, Verdict};

/// Why a booking request was rejected. Rejections are ordinary values
/// surfaced to the caller, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectionReason {
    InvalidInput,
    InvalidDuration,
    AppointmentInPast,
    SameDayNotAllowed,
    InsufficientAdvance,
    ExcessiveAdvance,
    Closed,
    OutsideHours,
    TimeConflict,
}

impl RejectionReason {
    /// Canonical user-facing message, shared by every client surface.
    pub fn message(&self) -> &'static str {
        constants::message_for(*self)
    }
}

/// Everything the validator needs to judge one booking request, loaded
/// up front so the checks themselves stay free of I/O. `appointments`
/// must be ordered by creation (the repositories order by created_at, id)
/// so conflict reporting is deterministic.
#[derive(Debug, Clone)]
pub struct ScheduleSnapshot {
    pub settings: AppointmentSettings,
    pub business_hours: Vec<BusinessHours>,
    pub special_hours: Vec<SpecialHours>,
    pub appointments: Vec<Appointment>,
}
