use axum::{
    routing::{get, put},
    Router,
};

use crate::app_state::AppState;

use super::handlers::{
    get_business_hours, replace_business_hours, update_settings, upsert_special_hours,
};

pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/{brand_id}/business-hours",
            get(get_business_hours).put(replace_business_hours),
        )
        .route("/{brand_id}/special-hours", put(upsert_special_hours))
        .route("/{brand_id}/settings", put(update_settings))
}
