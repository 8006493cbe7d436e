//! Composite booking validator: one pass, fixed rule order, first failure
//! wins.

use serde::Serialize;
use time::OffsetDateTime;

use super::{
    booking_window::within_booking_window,
    conflict::check_conflicts,
    constants::{MAX_DURATION_MINUTES, MIN_DURATION_MINUTES},
    hours::within_operating_hours,
    RejectionReason, ScheduleSnapshot,
};

/// The candidate booking as seen by the validator. The brand is implied by
/// the snapshot it is judged against.
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    pub start_time: OffsetDateTime,
    pub duration_minutes: i32,
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    Rejected {
        reason: RejectionReason,
        message: &'static str,
    },
}

impl Verdict {
    fn rejected(reason: RejectionReason) -> Self {
        Verdict::Rejected {
            reason,
            message: reason.message(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Judges one booking request against a consistent snapshot.
///
/// Rule order: duration bounds, advance-booking policy, operating hours,
/// conflicts. Runs no I/O and keeps no state, so identical inputs always
/// produce identical verdicts. Persisting an accepted appointment, and
/// serializing concurrent writers, is the caller's job.
pub fn validate_appointment(
    now: OffsetDateTime,
    request: &BookingRequest,
    snapshot: &ScheduleSnapshot,
) -> Verdict {
    if request.duration_minutes <= 0 {
        return Verdict::rejected(RejectionReason::InvalidInput);
    }

    if request.duration_minutes < MIN_DURATION_MINUTES
        || request.duration_minutes > MAX_DURATION_MINUTES
    {
        return Verdict::rejected(RejectionReason::InvalidDuration);
    }

    let settings = &snapshot.settings;

    if let Err(reason) = within_booking_window(
        now,
        request.start_time,
        settings.min_advance_booking_hours,
        settings.max_advance_booking_days,
        settings.allow_same_day_booking,
    ) {
        return Verdict::rejected(reason);
    }

    if let Err(reason) = within_operating_hours(
        request.start_time,
        request.duration_minutes,
        &snapshot.business_hours,
        &snapshot.special_hours,
    ) {
        return Verdict::rejected(reason);
    }

    if let Err(reason) = check_conflicts(
        request.start_time,
        request.duration_minutes,
        settings.buffer_minutes,
        &snapshot.appointments,
    ) {
        return Verdict::rejected(reason);
    }

    Verdict::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{
        Appointment, AppointmentSettings, AppointmentStatus, BusinessHours, SpecialHours,
    };
    use time::macros::{datetime, time};
    use time::Time;
    use uuid::Uuid;

    // Fixture: Mon-Fri 09:00-17:00, buffer 10, min advance 2h, max 30 days,
    // no same-day booking. 2026-03-02 is a Monday.
    const NOW: OffsetDateTime = datetime!(2026-03-02 08:00 UTC);

    fn weekly(day_of_week: i16, open: Option<(Time, Time)>) -> BusinessHours {
        BusinessHours {
            id: Uuid::new_v4(),
            brand_id: Uuid::nil(),
            day_of_week,
            is_open: open.is_some(),
            open_time: open.map(|(o, _)| o),
            close_time: open.map(|(_, c)| c),
            created_at: datetime!(2026-01-01 00:00 UTC),
            updated_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    fn settings() -> AppointmentSettings {
        AppointmentSettings {
            id: Uuid::new_v4(),
            brand_id: Uuid::nil(),
            default_duration_minutes: 30,
            buffer_minutes: 10,
            min_advance_booking_hours: 2,
            max_advance_booking_days: 30,
            allow_same_day_booking: false,
            created_at: datetime!(2026-01-01 00:00 UTC),
            updated_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    fn snapshot(appointments: Vec<Appointment>, special_hours: Vec<SpecialHours>) -> ScheduleSnapshot {
        let window = Some((time!(09:00), time!(17:00)));
        ScheduleSnapshot {
            settings: settings(),
            business_hours: (0i16..7)
                .map(|d| weekly(d, if (1..=5).contains(&d) { window } else { None }))
                .collect(),
            special_hours,
            appointments,
        }
    }

    fn request(start: OffsetDateTime, duration_minutes: i32) -> BookingRequest {
        BookingRequest {
            start_time: start,
            duration_minutes,
        }
    }

    fn appointment(start: OffsetDateTime, duration_minutes: i32) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            brand_id: Uuid::nil(),
            client_id: Uuid::new_v4(),
            start_time: start,
            duration_minutes,
            status: AppointmentStatus::Confirmed,
            notes: None,
            created_at: datetime!(2026-01-01 00:00 UTC),
            updated_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    #[test]
    fn tuesday_morning_is_accepted_end_to_end() {
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-03 09:00 UTC), 30),
            &snapshot(vec![], vec![]),
        );
        assert_eq!(verdict, Verdict::Accepted);
    }

    #[test]
    fn same_day_candidate_is_rejected() {
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-02 10:00 UTC), 30),
            &snapshot(vec![], vec![]),
        );
        assert_eq!(verdict.reason(), Some(RejectionReason::SameDayNotAllowed));
    }

    #[test]
    fn duration_bounds_short_circuit_everything_else() {
        // Out-of-bounds duration rejects even on a closed day in the past.
        let snap = snapshot(vec![], vec![]);
        for duration in [14, 481] {
            let verdict =
                validate_appointment(NOW, &request(datetime!(2026-03-01 10:00 UTC), duration), &snap);
            assert_eq!(verdict.reason(), Some(RejectionReason::InvalidDuration));
        }
    }

    #[test]
    fn nonpositive_duration_is_invalid_input() {
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-03 09:00 UTC), 0),
            &snapshot(vec![], vec![]),
        );
        assert_eq!(verdict.reason(), Some(RejectionReason::InvalidInput));
    }

    #[test]
    fn advance_policy_runs_before_hours_check() {
        // Sunday in the past: AppointmentInPast wins over Closed.
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-01 10:00 UTC), 30),
            &snapshot(vec![], vec![]),
        );
        assert_eq!(verdict.reason(), Some(RejectionReason::AppointmentInPast));
    }

    #[test]
    fn overlapping_booking_is_a_time_conflict() {
        let existing = vec![appointment(datetime!(2026-03-03 10:00 UTC), 30)];
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-03 10:15 UTC), 30),
            &snapshot(existing, vec![]),
        );
        assert_eq!(verdict.reason(), Some(RejectionReason::TimeConflict));
        assert_eq!(
            verdict,
            Verdict::Rejected {
                reason: RejectionReason::TimeConflict,
                message: "The selected time conflicts with an existing appointment",
            }
        );
    }

    #[test]
    fn verdict_is_idempotent_over_an_unchanged_snapshot() {
        let snap = snapshot(vec![appointment(datetime!(2026-03-03 10:00 UTC), 30)], vec![]);
        let req = request(datetime!(2026-03-03 10:15 UTC), 30);
        let first = validate_appointment(NOW, &req, &snap);
        let second = validate_appointment(NOW, &req, &snap);
        assert_eq!(first, second);
    }

    #[test]
    fn hours_check_runs_before_conflict_check() {
        // Candidate outside hours also overlaps an existing booking; the
        // hours rejection is reported.
        let existing = vec![appointment(datetime!(2026-03-03 18:00 UTC), 30)];
        let verdict = validate_appointment(
            NOW,
            &request(datetime!(2026-03-03 18:00 UTC), 30),
            &snapshot(existing, vec![]),
        );
        assert_eq!(verdict.reason(), Some(RejectionReason::OutsideHours));
    }
}
