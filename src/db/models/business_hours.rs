use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{OffsetDateTime, Time};
use validator::Validate;

/// Weekly recurring schedule entry. One row per (brand, day_of_week) with
/// 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct BusinessHours {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub day_of_week: i16,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BusinessHoursEntry {
    #[validate(range(min = 0, max = 6, message = "Day of week must be 0-6"))]
    pub day_of_week: i16,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceBusinessHours {
    #[validate(length(min = 1, max = 7, message = "Provide 1-7 weekly entries"))]
    #[validate(nested)]
    pub entries: Vec<BusinessHoursEntry>,
}

impl ReplaceBusinessHours {
    /// Cross-field rules the derive cannot express: each day appears at
    /// most once, open days carry ordered times, closed days carry none.
    pub fn check_entries(&self) -> Result<(), String> {
        let mut seen = [false; 7];
        for entry in &self.entries {
            if let Some(slot) = seen.get_mut(entry.day_of_week as usize) {
                if *slot {
                    return Err(format!("Duplicate entry for day {}", entry.day_of_week));
                }
                *slot = true;
            }
            check_open_close(entry.is_open, entry.open_time, entry.close_time)?;
        }
        Ok(())
    }
}

/// Open days need both times and open < close; closed days carry none.
pub(crate) fn check_open_close(
    is_open: bool,
    open_time: Option<Time>,
    close_time: Option<Time>,
) -> Result<(), String> {
    if !is_open {
        return Ok(());
    }
    match (open_time, close_time) {
        (Some(open), Some(close)) if open < close => Ok(()),
        (Some(_), Some(_)) => Err("Opening time must be before closing time".to_string()),
        _ => Err("Open days require opening and closing times".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn entry(day_of_week: i16, open: Option<(Time, Time)>) -> BusinessHoursEntry {
        BusinessHoursEntry {
            day_of_week,
            is_open: open.is_some(),
            open_time: open.map(|(o, _)| o),
            close_time: open.map(|(_, c)| c),
        }
    }

    #[test]
    fn open_day_requires_ordered_times() {
        assert!(check_open_close(true, Some(time!(09:00)), Some(time!(18:00))).is_ok());
        assert!(check_open_close(true, Some(time!(18:00)), Some(time!(09:00))).is_err());
        assert!(check_open_close(true, Some(time!(09:00)), None).is_err());
    }

    #[test]
    fn closed_day_needs_no_times() {
        assert!(check_open_close(false, None, None).is_ok());
    }

    #[test]
    fn duplicate_days_are_rejected() {
        let payload = ReplaceBusinessHours {
            entries: vec![
                entry(1, Some((time!(09:00), time!(18:00)))),
                entry(1, Some((time!(10:00), time!(16:00)))),
            ],
        };
        assert!(payload.check_entries().is_err());
    }

    #[test]
    fn distinct_well_formed_entries_pass() {
        let payload = ReplaceBusinessHours {
            entries: vec![
                entry(0, None),
                entry(1, Some((time!(09:00), time!(18:00)))),
            ],
        };
        assert!(payload.check_entries().is_ok());
    }

    #[test]
    fn day_of_week_range_is_enforced_by_field_rules() {
        let bad = entry(7, None);
        assert!(bad.validate().is_err());
    }
}
