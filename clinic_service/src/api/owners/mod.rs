use axum::{
    Router,
    routing::{get, post},
};

use crate::api::context::AppState;

pub(in crate::api) mod create_owner;
pub(in crate::api) mod get_owner;
pub(in crate::api) mod get_owners;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_owners::handler))
        .route("/", post(create_owner::handler))
        .route("/:id", get(get_owner::handler))
}
