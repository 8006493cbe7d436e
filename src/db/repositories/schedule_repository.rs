use sqlx::{PgExecutor, PgPool};
use time::{Date, Duration};
use uuid::Uuid;

use crate::db::models::{
    AppointmentSettings, BusinessHours, BusinessHoursEntry, SpecialHours, SpecialHoursUpsert,
    UpdateAppointmentSettings,
};
use crate::db::DatabaseError;
use crate::scheduling::ScheduleSnapshot;

use super::appointment_repository::AppointmentRepository;

pub struct ScheduleRepository;

impl ScheduleRepository {
    pub async fn get_settings(
        executor: impl PgExecutor<'_>,
        brand_id: Uuid,
    ) -> Result<AppointmentSettings, DatabaseError> {
        sqlx::query_as::<_, AppointmentSettings>(
            r#"
            SELECT id, brand_id, default_duration_minutes, buffer_minutes,
                   min_advance_booking_hours, max_advance_booking_days,
                   allow_same_day_booking, created_at, updated_at
            FROM appointment_settings
            WHERE brand_id = $1
            "#,
        )
        .bind(brand_id)
        .fetch_optional(executor)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn update_settings(
        pool: &PgPool,
        brand_id: Uuid,
        update: &UpdateAppointmentSettings,
    ) -> Result<AppointmentSettings, DatabaseError> {
        sqlx::query_as::<_, AppointmentSettings>(
            r#"
            UPDATE appointment_settings
            SET default_duration_minutes = COALESCE($1, default_duration_minutes),
                buffer_minutes = COALESCE($2, buffer_minutes),
                min_advance_booking_hours = COALESCE($3, min_advance_booking_hours),
                max_advance_booking_days = COALESCE($4, max_advance_booking_days),
                allow_same_day_booking = COALESCE($5, allow_same_day_booking),
                updated_at = NOW()
            WHERE brand_id = $6
            RETURNING id, brand_id, default_duration_minutes, buffer_minutes,
                      min_advance_booking_hours, max_advance_booking_days,
                      allow_same_day_booking, created_at, updated_at
            "#,
        )
        .bind(update.default_duration_minutes)
        .bind(update.buffer_minutes)
        .bind(update.min_advance_booking_hours)
        .bind(update.max_advance_booking_days)
        .bind(update.allow_same_day_booking)
        .bind(brand_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn list_business_hours(
        executor: impl PgExecutor<'_>,
        brand_id: Uuid,
    ) -> Result<Vec<BusinessHours>, DatabaseError> {
        let rows = sqlx::query_as::<_, BusinessHours>(
            r#"
            SELECT id, brand_id, day_of_week, is_open, open_time, close_time,
                   created_at, updated_at
            FROM business_hours
            WHERE brand_id = $1
            ORDER BY day_of_week
            "#,
        )
        .bind(brand_id)
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    /// Replaces the whole weekly schedule for a brand in one transaction.
    pub async fn replace_business_hours(
        pool: &PgPool,
        brand_id: Uuid,
        entries: &[BusinessHoursEntry],
    ) -> Result<Vec<BusinessHours>, DatabaseError> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM business_hours WHERE brand_id = $1")
            .bind(brand_id)
            .execute(&mut *tx)
            .await?;

        let mut stored = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query_as::<_, BusinessHours>(
                r#"
                INSERT INTO business_hours (brand_id, day_of_week, is_open, open_time, close_time)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, brand_id, day_of_week, is_open, open_time, close_time,
                          created_at, updated_at
                "#,
            )
            .bind(brand_id)
            .bind(entry.day_of_week)
            .bind(entry.is_open)
            .bind(entry.open_time)
            .bind(entry.close_time)
            .fetch_one(&mut *tx)
            .await?;
            stored.push(row);
        }

        tx.commit().await?;
        Ok(stored)
    }

    pub async fn special_hours_around(
        executor: impl PgExecutor<'_>,
        brand_id: Uuid,
        date: Date,
    ) -> Result<Vec<SpecialHours>, DatabaseError> {
        let rows = sqlx::query_as::<_, SpecialHours>(
            r#"
            SELECT id, brand_id, date, is_open, open_time, close_time, reason,
                   created_at, updated_at
            FROM special_hours
            WHERE brand_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date
            "#,
        )
        .bind(brand_id)
        .bind(date - Duration::days(1))
        .bind(date + Duration::days(1))
        .fetch_all(executor)
        .await?;
        Ok(rows)
    }

    pub async fn upsert_special_hours(
        pool: &PgPool,
        brand_id: Uuid,
        upsert: &SpecialHoursUpsert,
    ) -> Result<SpecialHours, DatabaseError> {
        let row = sqlx::query_as::<_, SpecialHours>(
            r#"
            INSERT INTO special_hours (brand_id, date, is_open, open_time, close_time, reason)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (brand_id, date) DO UPDATE
            SET is_open = EXCLUDED.is_open,
                open_time = EXCLUDED.open_time,
                close_time = EXCLUDED.close_time,
                reason = EXCLUDED.reason,
                updated_at = NOW()
            RETURNING id, brand_id, date, is_open, open_time, close_time, reason,
                      created_at, updated_at
            "#,
        )
        .bind(brand_id)
        .bind(upsert.date)
        .bind(upsert.is_open)
        .bind(upsert.open_time)
        .bind(upsert.close_time)
        .bind(&upsert.reason)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Loads everything the validator needs to judge a booking on the given
    /// date, from a single executor so callers can pin it to a transaction.
    pub async fn load_snapshot(
        conn: &mut sqlx::PgConnection,
        brand_id: Uuid,
        date: Date,
    ) -> Result<ScheduleSnapshot, DatabaseError> {
        let settings = Self::get_settings(&mut *conn, brand_id).await?;
        let business_hours = Self::list_business_hours(&mut *conn, brand_id).await?;
        let special_hours = Self::special_hours_around(&mut *conn, brand_id, date).await?;
        let appointments =
            AppointmentRepository::list_around_date(&mut *conn, brand_id, date).await?;

        Ok(ScheduleSnapshot {
            settings,
            business_hours,
            special_hours,
            appointments,
        })
    }
}
