use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use time::{Date, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::auth::{require_brand_staff, require_owner_or_staff, Actor};
use crate::db::models::{Appointment, NewAppointment, UpdateAppointmentStatus};
use crate::db::repositories::{AppointmentRepository, BookingOutcome, BrandRepository};
use crate::error::AppResult;

pub async fn book_appointment(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    actor: Actor,
    Json(payload): Json<NewAppointment>,
) -> AppResult<Response> {
    require_owner_or_staff(&actor, brand_id, payload.client_id)?;
    payload.validate()?;
    BrandRepository::require_active_brand(&state.db, brand_id).await?;

    let now = OffsetDateTime::now_utc();
    let outcome = AppointmentRepository::book(&state.db, brand_id, &payload, now).await?;

    match outcome {
        BookingOutcome::Booked(appointment) => {
            Ok((StatusCode::CREATED, Json(appointment)).into_response())
        }
        BookingOutcome::Rejected { reason, message } => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "ok": false,
                "reason": reason,
                "message": message,
            })),
        )
            .into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Date,
}

pub async fn list_appointments(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    actor: Actor,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    require_brand_staff(&actor, brand_id)?;
    let rows = AppointmentRepository::list_for_day(&state.db, brand_id, query.date).await?;
    Ok(Json(rows))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(appointment_id): Path<Uuid>,
    actor: Actor,
    Json(payload): Json<UpdateAppointmentStatus>,
) -> AppResult<Json<Appointment>> {
    let current = AppointmentRepository::get_appointment(&state.db, appointment_id).await?;
    require_brand_staff(&actor, current.brand_id)?;

    let updated =
        AppointmentRepository::update_status(&state.db, appointment_id, payload.status).await?;
    Ok(Json(updated))
}
