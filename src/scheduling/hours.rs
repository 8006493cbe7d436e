//! Time-window check against weekly business hours and date-specific
//! overrides.
//!
//! Inputs are assumed to already be normalized to the brand's local wall
//! clock; time-zone resolution happens before the snapshot is built.

use time::{Duration, OffsetDateTime, Time};

use crate::db::models::{BusinessHours, SpecialHours};

use super::RejectionReason;

/// Decides whether the candidate interval [start, start + duration) falls
/// inside the resolved operating hours for that date.
///
/// A [`SpecialHours`] row for the exact date fully overrides the weekly
/// entry, including opening a normally-closed day or closing an open one.
/// Closing time is exclusive: an appointment may end exactly at close but
/// not extend past it. Candidates whose end lands on a later calendar date
/// are rejected; cross-midnight spans are unsupported.
pub fn within_operating_hours(
    start: OffsetDateTime,
    duration_minutes: i32,
    weekly: &[BusinessHours],
    overrides: &[SpecialHours],
) -> Result<(), RejectionReason> {
    let end = start + Duration::minutes(duration_minutes as i64);
    if end.date() != start.date() {
        return Err(RejectionReason::OutsideHours);
    }

    let window = resolve_window(start, weekly, overrides);
    match window {
        Some((open, close)) => {
            if start.time() >= open && end.time() <= close {
                Ok(())
            } else {
                Err(RejectionReason::OutsideHours)
            }
        }
        None => Err(RejectionReason::Closed),
    }
}

/// Resolves the (open, close) window for the candidate's date, or `None`
/// when the brand is closed. A missing weekly row counts as closed.
fn resolve_window(
    start: OffsetDateTime,
    weekly: &[BusinessHours],
    overrides: &[SpecialHours],
) -> Option<(Time, Time)> {
    if let Some(special) = overrides.iter().find(|s| s.date == start.date()) {
        if !special.is_open {
            return None;
        }
        return special.open_time.zip(special.close_time);
    }

    let day_of_week = start.weekday().number_days_from_sunday() as i16;
    let entry = weekly.iter().find(|h| h.day_of_week == day_of_week)?;
    if !entry.is_open {
        return None;
    }
    entry.open_time.zip(entry.close_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

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

    fn special(date: time::Date, open: Option<(Time, Time)>) -> SpecialHours {
        SpecialHours {
            id: Uuid::new_v4(),
            brand_id: Uuid::nil(),
            date,
            is_open: open.is_some(),
            open_time: open.map(|(o, _)| o),
            close_time: open.map(|(_, c)| c),
            reason: None,
            created_at: datetime!(2026-01-01 00:00 UTC),
            updated_at: datetime!(2026-01-01 00:00 UTC),
        }
    }

    // 2026-03-01 is a Sunday, 2026-03-02 a Monday.
    fn mon_nine_to_six() -> Vec<BusinessHours> {
        vec![
            weekly(0, None),
            weekly(1, Some((time!(09:00), time!(18:00)))),
        ]
    }

    #[test]
    fn closed_day_is_rejected_as_closed() {
        let verdict =
            within_operating_hours(datetime!(2026-03-01 10:00 UTC), 30, &mon_nine_to_six(), &[]);
        assert_eq!(verdict, Err(RejectionReason::Closed));
    }

    #[test]
    fn missing_weekly_entry_counts_as_closed() {
        // Tuesday has no row at all.
        let verdict =
            within_operating_hours(datetime!(2026-03-03 10:00 UTC), 30, &mon_nine_to_six(), &[]);
        assert_eq!(verdict, Err(RejectionReason::Closed));
    }

    #[test]
    fn end_may_touch_close_but_not_pass_it() {
        let hours = mon_nine_to_six();
        // 17:30 + 30min ends exactly at close.
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 17:30 UTC), 30, &hours, &[]),
            Ok(())
        );
        // 17:45 + 30min ends at 18:15, past close.
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 17:45 UTC), 30, &hours, &[]),
            Err(RejectionReason::OutsideHours)
        );
    }

    #[test]
    fn start_before_open_is_outside_hours() {
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 08:30 UTC), 30, &mon_nine_to_six(), &[]),
            Err(RejectionReason::OutsideHours)
        );
    }

    #[test]
    fn special_hours_override_weekly_schedule() {
        let hours = mon_nine_to_six();
        // Monday shortened to 10:00-12:00 by an override.
        let overrides = vec![special(
            date!(2026 - 03 - 02),
            Some((time!(10:00), time!(12:00))),
        )];
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 09:15 UTC), 30, &hours, &overrides),
            Err(RejectionReason::OutsideHours)
        );
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 10:15 UTC), 30, &hours, &overrides),
            Ok(())
        );
    }

    #[test]
    fn special_hours_can_open_a_closed_day() {
        let hours = mon_nine_to_six();
        let overrides = vec![special(
            date!(2026 - 03 - 01),
            Some((time!(11:00), time!(15:00))),
        )];
        assert_eq!(
            within_operating_hours(datetime!(2026-03-01 11:30 UTC), 60, &hours, &overrides),
            Ok(())
        );
    }

    #[test]
    fn special_hours_can_close_an_open_day() {
        let hours = mon_nine_to_six();
        let overrides = vec![special(date!(2026 - 03 - 02), None)];
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 10:00 UTC), 30, &hours, &overrides),
            Err(RejectionReason::Closed)
        );
    }

    #[test]
    fn cross_midnight_span_is_outside_hours() {
        let hours = vec![weekly(1, Some((time!(09:00), time!(23:59))))];
        assert_eq!(
            within_operating_hours(datetime!(2026-03-02 23:30 UTC), 60, &hours, &[]),
            Err(RejectionReason::OutsideHours)
        );
    }
}
