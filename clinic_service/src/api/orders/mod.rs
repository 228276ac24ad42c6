use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::AppState;

pub(in crate::api) mod create_order;
pub(in crate::api) mod get_order;
pub(in crate::api) mod get_orders;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_orders::handler))
        .route("/", post(create_order::handler))
        .route("/:id", get(get_order::handler))
}
