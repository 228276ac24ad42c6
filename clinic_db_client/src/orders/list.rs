use chrono::{DateTime, Utc};
use models_clinic::Order;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use super::OrderRow;
use crate::listing::{contains_pattern, resolve_ordering};

const ORDERABLE: &[(&str, &str)] = &[("date", "o.date"), ("created_at", "o.created_at")];

#[derive(Debug, Default)]
pub struct OrderListParams {
    pub owner_id: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Lists orders, most recent order first by default. Exact filters on owner
/// and date; free-text search over the owner's name, which is why the query
/// always joins owners.
#[instrument(skip(db, params))]
pub async fn list_orders(db: &PgPool, params: &OrderListParams) -> anyhow::Result<Vec<Order>> {
    let mut query = QueryBuilder::new(
        "SELECT o.id, o.owner_id, o.date, o.items, o.total, o.notes, o.created_at, o.updated_at \
         FROM orders o JOIN owners ow ON ow.id = o.owner_id WHERE TRUE",
    );

    if let Some(owner_id) = params.owner_id {
        query.push(" AND o.owner_id = ");
        query.push_bind(owner_id);
    }
    if let Some(date) = params.date {
        query.push(" AND o.date = ");
        query.push_bind(date);
    }
    if let Some(search) = &params.search {
        query.push(" AND ow.name ILIKE ");
        query.push_bind(contains_pattern(search));
    }

    query.push(" ORDER BY ");
    query.push(resolve_ordering(
        params.ordering.as_deref(),
        ORDERABLE,
        "o.date DESC",
    ));

    let rows = query.build_query_as::<OrderRow>().fetch_all(db).await?;
    Ok(rows.into_iter().map(Order::from).collect())
}
