//! Buffered overlap detection against a brand's existing appointments.

use time::{Duration, OffsetDateTime};

use crate::db::models::Appointment;

use super::RejectionReason;

/// Finds the first existing appointment too close to the candidate
/// interval.
///
/// The candidate is expanded by `buffer_minutes` on each side and tested
/// against the raw existing intervals, so two bookings must leave at least
/// that much gap between them (expanding both sides would double the
/// required gap). Cancelled appointments free their slot; every other
/// status occupies it, no-shows included. `existing` is expected in
/// creation order so the returned conflict is deterministic.
pub fn find_conflict<'a>(
    start: OffsetDateTime,
    duration_minutes: i32,
    buffer_minutes: i32,
    existing: &'a [Appointment],
) -> Option<&'a Appointment> {
    let buffer = Duration::minutes(buffer_minutes as i64);
    let candidate_start = start - buffer;
    let candidate_end = start + Duration::minutes(duration_minutes as i64) + buffer;

    existing
        .iter()
        .filter(|appointment| appointment.status.occupies_slot())
        .find(|appointment| {
            candidate_start < appointment.end_time() && appointment.start_time < candidate_end
        })
}

/// Convenience wrapper translating a found conflict into the canonical
/// rejection reason.
pub fn check_conflicts(
    start: OffsetDateTime,
    duration_minutes: i32,
    buffer_minutes: i32,
    existing: &[Appointment],
) -> Result<(), RejectionReason> {
    match find_conflict(start, duration_minutes, buffer_minutes, existing) {
        Some(_) => Err(RejectionReason::TimeConflict),
        None => Ok(()),
    }
}
