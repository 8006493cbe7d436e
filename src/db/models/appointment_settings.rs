use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

/// Per-brand booking configuration consumed by the scheduling validator.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct AppointmentSettings {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub default_duration_minutes: i32,
    pub buffer_minutes: i32,
    pub min_advance_booking_hours: i32,
    pub max_advance_booking_days: i32,
    pub allow_same_day_booking: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAppointmentSettings {
    #[validate(range(min = 15, max = 480, message = "Default duration must be 15-480 minutes"))]
    pub default_duration_minutes: Option<i32>,
    #[validate(range(min = 0, max = 60, message = "Buffer must be 0-60 minutes"))]
    pub buffer_minutes: Option<i32>,
    #[validate(range(min = 0, max = 168, message = "Minimum advance must be 0-168 hours"))]
    pub min_advance_booking_hours: Option<i32>,
    #[validate(range(min = 1, max = 365, message = "Maximum advance must be 1-365 days"))]
    pub max_advance_booking_days: Option<i32>,
    pub allow_same_day_booking: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_ranges_are_enforced() {
        let ok = UpdateAppointmentSettings {
            default_duration_minutes: Some(30),
            buffer_minutes: Some(10),
            min_advance_booking_hours: Some(2),
            max_advance_booking_days: Some(30),
            allow_same_day_booking: Some(false),
        };
        assert!(ok.validate().is_ok());

        let bad_buffer = UpdateAppointmentSettings {
            buffer_minutes: Some(61),
            ..ok
        };
        assert!(bad_buffer.validate().is_err());
    }
}
