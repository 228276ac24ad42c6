use models_clinic::Order;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::OrderRow;

#[instrument(skip(db))]
pub async fn get_order(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(
        "SELECT id, owner_id, date, items, total, notes, created_at, updated_at \
         FROM orders WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(Order::from))
}
