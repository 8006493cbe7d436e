//! Advance-booking policy: how far from "now" a booking may be placed.

use time::OffsetDateTime;

use super::RejectionReason;

/// Applies the advance-booking rules in a fixed order; the first failing
/// rule wins.
///
/// 1. The start must lie strictly in the future.
/// 2. Same-day starts are rejected when the brand disallows them.
/// 3. The lead time in hours must reach `min_advance_hours`.
/// 4. The lead time in days must not exceed `max_advance_days`.
///
/// Lead-time comparisons use floating-point division without rounding, so
/// a candidate exactly at the boundary is accepted on both ends.
pub fn within_booking_window(
    now: OffsetDateTime,
    start: OffsetDateTime,
    min_advance_hours: i32,
    max_advance_days: i32,
    allow_same_day: bool,
) -> Result<(), RejectionReason> {
    if start <= now {
        return Err(RejectionReason::AppointmentInPast);
    }

    if !allow_same_day && start.date() == now.date() {
        return Err(RejectionReason::SameDayNotAllowed);
    }

    let lead_seconds = (start - now).as_seconds_f64();

    let lead_hours = lead_seconds / 3600.0;
    if lead_hours < min_advance_hours as f64 {
        return Err(RejectionReason::InsufficientAdvance);
    }

    let lead_days = lead_seconds / 86_400.0;
    if lead_days > max_advance_days as f64 {
        return Err(RejectionReason::ExcessiveAdvance);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-03-02 08:00 UTC);

    #[test]
    fn past_or_present_start_is_rejected() {
        assert_eq!(
            within_booking_window(NOW, NOW, 0, 365, true),
            Err(RejectionReason::AppointmentInPast)
        );
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-03-01 10:00 UTC), 0, 365, true),
            Err(RejectionReason::AppointmentInPast)
        );
    }

    #[test]
    fn same_day_check_runs_before_advance_checks() {
        // Even with plenty of lead time left in the day, same-day wins.
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-03-02 20:00 UTC), 2, 365, false),
            Err(RejectionReason::SameDayNotAllowed)
        );
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-03-02 20:00 UTC), 2, 365, true),
            Ok(())
        );
    }

    #[test]
    fn minimum_advance_boundary_is_inclusive() {
        // 1h59m short of a 2-hour minimum.
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-03-02 09:59 UTC), 2, 365, true),
            Err(RejectionReason::InsufficientAdvance)
        );
        // Exactly 2h00m is accepted.
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-03-02 10:00 UTC), 2, 365, true),
            Ok(())
        );
    }

    #[test]
    fn maximum_advance_boundary_is_inclusive() {
        // Exactly 30 days out.
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-04-01 08:00 UTC), 0, 30, true),
            Ok(())
        );
        // One minute past 30 days.
        assert_eq!(
            within_booking_window(NOW, datetime!(2026-04-01 08:01 UTC), 0, 30, true),
            Err(RejectionReason::ExcessiveAdvance)
        );
    }
}
