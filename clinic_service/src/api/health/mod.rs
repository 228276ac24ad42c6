use axum::{Router, routing::get};

/// Liveness probe; deliberately does not touch the database.
#[utoipa::path(
        get,
        tag = "health",
        operation_id = "health",
        path = "/health",
        responses(
            (status = 200, description = "service is up", body = String),
        )
    )]
pub async fn health_handler() -> &'static str {
    "healthy"
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_handler))
}
