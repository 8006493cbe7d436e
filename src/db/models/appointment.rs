use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Duration, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    NoShow,
    Completed,
}

impl AppointmentStatus {
    /// Cancelled, no-show and completed appointments accept no further
    /// transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Cancelled
                | AppointmentStatus::NoShow
                | AppointmentStatus::Completed
        )
    }

    /// Everything except a cancelled appointment keeps its slot occupied,
    /// including no-shows.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        match self {
            AppointmentStatus::Scheduled => matches!(
                next,
                AppointmentStatus::Confirmed
                    | AppointmentStatus::Cancelled
                    | AppointmentStatus::NoShow
                    | AppointmentStatus::Completed
            ),
            AppointmentStatus::Confirmed => matches!(
                next,
                AppointmentStatus::Cancelled
                    | AppointmentStatus::NoShow
                    | AppointmentStatus::Completed
            ),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub client_id: Uuid,
    pub start_time: OffsetDateTime,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Appointment {
    pub fn end_time(&self) -> OffsetDateTime {
        self.start_time + Duration::minutes(self.duration_minutes as i64)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAppointment {
    pub client_id: Uuid,
    pub start_time: OffsetDateTime,
    #[validate(range(min = 15, max = 480, message = "Duration must be 15-480 minutes"))]
    pub duration_minutes: i32,
    pub notes: Option<String>,
}

#[allow(unused)]
impl NewAppointment {
    pub fn end_time(&self) -> OffsetDateTime {
        self.start_time + Duration::minutes(self.duration_minutes as i64)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentStatus {
    pub status: AppointmentStatus,
}
