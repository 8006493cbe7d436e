use axum::{routing::get, Router};

use crate::app_state::AppState;

use super::handlers::{business_types, features, landing_config, plans};

pub fn landing_routes() -> Router<AppState> {
    Router::new()
        .route("/config", get(landing_config))
        .route("/business-types", get(business_types))
        .route("/features", get(features))
        .route("/plans", get(plans))
}
