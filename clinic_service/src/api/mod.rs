use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::AppState;

// Utilities
pub mod context;

// Routes
mod appointments;
mod health;
mod orders;
mod owners;
mod pets;

// Misc
mod swagger;

pub async fn setup_and_serve(state: AppState) -> anyhow::Result<()> {
    let cors = CorsLayer::permissive();

    let port = state.config.port;
    let env = state.config.environment;
    let app = api_router()
        .with_state(state)
        .layer(cors.clone())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        // The health router is attached here so we don't attach the logging middleware to it
        .merge(health::router().layer(cors))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("could not bind listener")?;
    tracing::info!(
        "clinic service is up and running with environment {:?} on port {}",
        env,
        port
    );
    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/owners", owners::router())
        .nest("/pets", pets::router())
        .nest("/appointments", appointments::router())
        .nest("/orders", orders::router())
}
