use std::sync::Arc;

use anyhow::Context;
use clinic_service::api::{self, context::AppState};
use clinic_service::config::{Config, Environment};
use clinic_service::entrypoint::Entrypoint;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

async fn connect_to_database(config: &Config) -> anyhow::Result<PgPool> {
    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (1, 25),
        Environment::Local => (1, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Entrypoint::default().init();

    let config = Config::from_env().context("expected to be able to generate config")?;

    let db = connect_to_database(&config).await?;
    clinic_db_client::run_migrations(&db).await?;
    tracing::trace!("initialized db connection");

    api::setup_and_serve(AppState {
        config: Arc::new(config),
        db,
    })
    .await?;

    Ok(())
}
