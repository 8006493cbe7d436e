use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::auth::{require_brand_root, Actor};
use crate::db::models::{
    AppointmentSettings, BusinessHours, ReplaceBusinessHours, SpecialHours, SpecialHoursUpsert,
    UpdateAppointmentSettings,
};
use crate::db::repositories::{BrandRepository, ScheduleRepository};
use crate::error::{AppError, AppResult};

pub async fn replace_business_hours(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    actor: Actor,
    Json(payload): Json<ReplaceBusinessHours>,
) -> AppResult<Json<Vec<BusinessHours>>> {
    require_brand_root(&actor, brand_id)?;
    payload.validate()?;
    payload.check_entries().map_err(AppError::Validation)?;
    BrandRepository::require_active_brand(&state.db, brand_id).await?;

    let stored =
        ScheduleRepository::replace_business_hours(&state.db, brand_id, &payload.entries).await?;
    Ok(Json(stored))
}

pub async fn upsert_special_hours(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    actor: Actor,
    Json(payload): Json<SpecialHoursUpsert>,
) -> AppResult<Json<SpecialHours>> {
    require_brand_root(&actor, brand_id)?;
    payload.validate()?;
    payload.check_times().map_err(AppError::Validation)?;
    BrandRepository::require_active_brand(&state.db, brand_id).await?;

    let stored = ScheduleRepository::upsert_special_hours(&state.db, brand_id, &payload).await?;
    Ok(Json(stored))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
    actor: Actor,
    Json(payload): Json<UpdateAppointmentSettings>,
) -> AppResult<Json<AppointmentSettings>> {
    require_brand_root(&actor, brand_id)?;
    payload.validate()?;
    BrandRepository::require_active_brand(&state.db, brand_id).await?;

    let stored = ScheduleRepository::update_settings(&state.db, brand_id, &payload).await?;
    Ok(Json(stored))
}

pub async fn get_business_hours(
    State(state): State<AppState>,
    Path(brand_id): Path<Uuid>,
) -> AppResult<Json<Vec<BusinessHours>>> {
    let rows = ScheduleRepository::list_business_hours(&state.db, brand_id).await?;
    Ok(Json(rows))
}
