use sqlx::PgPool;
use tracing::instrument;

#[instrument(skip(db))]
pub async fn delete_all_orders(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM orders").execute(db).await?;
    Ok(result.rows_affected())
}
