use models_clinic::{Order, OrderItem};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::OrderRow;

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub owner_id: Uuid,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateOrderError {
    #[error("owner does not exist")]
    UnknownOwner,
    #[error("Database error: {0}")]
    DatabaseError(#[from] anyhow::Error),
}

/// Inserts a new order. `date` is set by the database at creation; `total`
/// is stored exactly as supplied, never recomputed from the items.
#[instrument(skip(db, new_order), fields(owner_id = %new_order.owner_id))]
pub async fn create_order(db: &PgPool, new_order: NewOrder) -> Result<Order, CreateOrderError> {
    tracing::trace!("inserting order");

    let result = sqlx::query_as::<_, OrderRow>(
        "INSERT INTO orders (id, owner_id, items, total, notes) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, owner_id, date, items, total, notes, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(new_order.owner_id)
    .bind(sqlx::types::Json(&new_order.items))
    .bind(new_order.total)
    .bind(&new_order.notes)
    .fetch_one(db)
    .await;

    match result {
        Ok(row) => Ok(row.into()),
        Err(err) => {
            if let sqlx::Error::Database(db_err) = &err
                && db_err.is_foreign_key_violation()
            {
                return Err(CreateOrderError::UnknownOwner);
            }

            tracing::error!(error=?err, "unable to insert order");
            Err(CreateOrderError::DatabaseError(anyhow::anyhow!(
                "unable to insert order: {}",
                err
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owners::create::{create_owner, tests::sample_owner};
    use std::str::FromStr;

    // Skipped by default because you have to spin up a db,
    // Run with: `cargo test -p clinic_db_client -- --ignored`
    #[sqlx::test]
    #[ignore]
    async fn test_create_order_keeps_caller_total(pool: PgPool) -> anyhow::Result<()> {
        let owner = create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        // total deliberately disagrees with the line items; the server must
        // store it untouched
        let order = create_order(
            &pool,
            NewOrder {
                owner_id: owner.id,
                items: vec![OrderItem {
                    name: "Vacina".to_string(),
                    quantity: 1,
                    unit_price: Decimal::from_str("100.00")?,
                    line_total: Decimal::from_str("100.00")?,
                }],
                total: Decimal::from_str("999.99")?,
                notes: Some("Compra de vacina".to_string()),
            },
        )
        .await?;

        assert_eq!(order.owner, owner.id);
        assert_eq!(order.total.to_string(), "999.99");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Vacina");

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_create_order_unknown_owner(pool: PgPool) -> anyhow::Result<()> {
        let result = create_order(
            &pool,
            NewOrder {
                owner_id: Uuid::new_v4(),
                items: vec![],
                total: Decimal::ZERO,
                notes: None,
            },
        )
        .await;

        assert!(matches!(result, Err(CreateOrderError::UnknownOwner)));
        Ok(())
    }
}
