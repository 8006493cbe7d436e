use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime, Time};
use validator::Validate;

use super::business_hours::check_open_close;

/// Date-specific override of the weekly schedule (holidays, exceptions).
/// Unique per (brand, date); takes precedence over [`super::BusinessHours`]
/// for that date.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SpecialHours {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub date: Date,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
    pub reason: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SpecialHoursUpsert {
    pub date: Date,
    pub is_open: bool,
    pub open_time: Option<Time>,
    pub close_time: Option<Time>,
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

impl SpecialHoursUpsert {
    pub fn check_times(&self) -> Result<(), String> {
        check_open_close(self.is_open, self.open_time, self.close_time)
    }
}
