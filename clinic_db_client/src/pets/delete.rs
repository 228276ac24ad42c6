use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

/// Deletes a pet and its appointments in one transaction. Returns false
/// when the pet does not exist.
#[instrument(skip(db))]
pub async fn delete_pet(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM appointments WHERE pet_id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;

    let result = sqlx::query("DELETE FROM pets WHERE id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;

    tx.commit().await?;

    tracing::trace!(deleted = result.rows_affected() > 0, "deleted pet");
    Ok(result.rows_affected() > 0)
}

#[instrument(skip(db))]
pub async fn delete_all_pets(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM pets").execute(db).await?;
    Ok(result.rows_affected())
}
