use axum::{extract::State, Json};

use crate::app_state::AppState;
use crate::db::models::{BusinessType, Feature, LandingConfig, SubscriptionPlan};
use crate::db::repositories::CatalogRepository;
use crate::error::AppResult;

pub async fn landing_config(State(state): State<AppState>) -> AppResult<Json<LandingConfig>> {
    let config = CatalogRepository::landing_config(&state.db).await?;
    Ok(Json(config))
}

pub async fn business_types(State(state): State<AppState>) -> AppResult<Json<Vec<BusinessType>>> {
    let rows = CatalogRepository::list_business_types(&state.db).await?;
    Ok(Json(rows))
}

pub async fn features(State(state): State<AppState>) -> AppResult<Json<Vec<Feature>>> {
    let rows = CatalogRepository::list_features(&state.db).await?;
    Ok(Json(rows))
}

pub async fn plans(State(state): State<AppState>) -> AppResult<Json<Vec<SubscriptionPlan>>> {
    let rows = CatalogRepository::list_plans(&state.db).await?;
    Ok(Json(rows))
}
