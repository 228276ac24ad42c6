//! Postgres persistence layer for the clinic backend. One module per
//! entity, one file per operation.

use anyhow::Context;

pub mod appointments;
pub mod orders;
pub mod owners;
pub mod pets;

pub(crate) mod listing;

/// Applies the schema migrations bundled with this crate.
pub async fn run_migrations(db: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(db)
        .await
        .context("could not run database migrations")?;
    Ok(())
}
