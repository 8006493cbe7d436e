use axum::{
    routing::{get, patch},
    Router,
};

use crate::app_state::AppState;

use super::handlers::{book_appointment, list_appointments, update_status};

pub fn brand_appointment_routes() -> Router<AppState> {
    Router::new().route(
        "/{brand_id}/appointments",
        get(list_appointments).post(book_appointment),
    )
}

pub fn appointment_routes() -> Router<AppState> {
    Router::new().route("/{appointment_id}/status", patch(update_status))
}
