use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::AppState;

pub(in crate::api) mod create_appointment;
pub(in crate::api) mod get_appointment;
pub(in crate::api) mod get_appointments;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_appointments::handler))
        .route("/", post(create_appointment::handler))
        .route("/:id", get(get_appointment::handler))
}
