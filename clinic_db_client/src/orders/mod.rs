use chrono::{DateTime, Utc};
use models_clinic::{Order, OrderItem};
use rust_decimal::Decimal;
use uuid::Uuid;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;

/// Raw orders row; `items` is a JSONB column holding the line-item list.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub date: DateTime<Utc>,
    pub items: sqlx::types::Json<Vec<OrderItem>>,
    pub total: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            owner: row.owner_id,
            date: row.date,
            items: row.items.0,
            total: row.total,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
