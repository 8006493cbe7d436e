use sqlx::{PgExecutor, PgPool};
use time::{Date, Duration, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use crate::db::models::{Appointment, AppointmentStatus, NewAppointment};
use crate::db::DatabaseError;
use crate::scheduling::{validate_appointment, BookingRequest, RejectionReason, Verdict};

use super::schedule_repository::ScheduleRepository;

/// Result of a booking attempt: either the stored appointment or the
/// validator's rejection, which the handler surfaces as a 422.
#[derive(Debug)]
pub enum BookingOutcome {
    Booked(Appointment),
    Rejected {
        reason: RejectionReason,
        message: &'static str,
    },
}

pub struct AppointmentRepository;

impl AppointmentRepository {
    /// Appointments whose interval can touch the given date, one day of
    /// slack on each side so buffered conflict checks near midnight see
    /// their neighbours. Ordered by creation so conflict reporting is
    /// deterministic.
    pub async fn list_around_date(
        executor: impl PgExecutor<'_>,
        brand_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let from = OffsetDateTime::new_utc(date - Duration::days(1), time::Time::MIDNIGHT);
        let to = OffsetDateTime::new_utc(date + Duration::days(2), time::Time::MIDNIGHT);

        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, brand_id, client_id, start_time, duration_minutes, status,
                   notes, created_at, updated_at
            FROM appointments
            WHERE brand_id = $1 AND start_time >= $2 AND start_time < $3
            ORDER BY created_at, id
            "#,
        )
        .bind(brand_id)
        .bind(from)
        .bind(to)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    pub async fn list_for_day(
        pool: &PgPool,
        brand_id: Uuid,
        date: Date,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let from = OffsetDateTime::new_utc(date, time::Time::MIDNIGHT);
        let to = OffsetDateTime::new_utc(date + Duration::days(1), time::Time::MIDNIGHT);

        let rows = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, brand_id, client_id, start_time, duration_minutes, status,
                   notes, created_at, updated_at
            FROM appointments
            WHERE brand_id = $1 AND start_time >= $2 AND start_time < $3
            ORDER BY start_time
            "#,
        )
        .bind(brand_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_appointment(
        pool: &PgPool,
        appointment_id: Uuid,
    ) -> Result<Appointment, DatabaseError> {
        sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, brand_id, client_id, start_time, duration_minutes, status,
                   notes, created_at, updated_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    /// Validates and persists one booking inside a transaction that holds a
    /// per-brand advisory lock. Serializing writers per brand closes the
    /// window where two conflicting requests both pass validation and both
    /// get persisted.
    pub async fn book(
        pool: &PgPool,
        brand_id: Uuid,
        new: &NewAppointment,
        now: OffsetDateTime,
    ) -> Result<BookingOutcome, DatabaseError> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(brand_lock_key(brand_id))
            .execute(&mut *tx)
            .await?;

        let snapshot =
            ScheduleRepository::load_snapshot(&mut *tx, brand_id, new.start_time.date()).await?;

        let request = BookingRequest {
            start_time: new.start_time,
            duration_minutes: new.duration_minutes,
        };
        if let Verdict::Rejected { reason, message } = validate_appointment(now, &request, &snapshot)
        {
            info!(%brand_id, ?reason, "booking rejected");
            return Ok(BookingOutcome::Rejected { reason, message });
        }

        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (brand_id, client_id, start_time, duration_minutes, status, notes)
            VALUES ($1, $2, $3, $4, 'scheduled', $5)
            RETURNING id, brand_id, client_id, start_time, duration_minutes, status,
                      notes, created_at, updated_at
            "#,
        )
        .bind(brand_id)
        .bind(new.client_id)
        .bind(new.start_time)
        .bind(new.duration_minutes)
        .bind(&new.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(%brand_id, appointment_id = %appointment.id, "appointment booked");
        Ok(BookingOutcome::Booked(appointment))
    }

    pub async fn update_status(
        pool: &PgPool,
        appointment_id: Uuid,
        next: AppointmentStatus,
    ) -> Result<Appointment, DatabaseError> {
        let current = Self::get_appointment(pool, appointment_id).await?;
        if !current.status.can_transition_to(next) {
            return Err(DatabaseError::InvalidInput(format!(
                "Cannot transition appointment from {:?} to {:?}",
                current.status, next
            )));
        }

        // Compare-and-set on the status we just checked, so a concurrent
        // transition cannot overwrite a state it never saw.
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $1, updated_at = NOW()
            WHERE id = $2 AND status = $3
            RETURNING id, brand_id, client_id, start_time, duration_minutes, status,
                      notes, created_at, updated_at
            "#,
        )
        .bind(next)
        .bind(appointment_id)
        .bind(current.status)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::InvalidInput("Appointment status changed concurrently".to_string())
        })
    }
}

/// Stable bigint key for `pg_advisory_xact_lock`, derived from the brand id.
fn brand_lock_key(brand_id: Uuid) -> i64 {
    let (hi, lo) = brand_id.as_u64_pair();
    (hi ^ lo) as i64
}
