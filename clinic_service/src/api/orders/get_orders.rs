use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use clinic_db_client::orders::list::{OrderListParams, list_orders};
use models_clinic::Order;
use sqlx::PgPool;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error};

#[derive(serde::Deserialize, Debug, IntoParams)]
pub struct OrdersListQuery {
    /// Exact owner id match
    pub owner: Option<Uuid>,
    /// Exact order datetime match, RFC 3339
    pub date: Option<DateTime<Utc>>,
    /// Case-insensitive contains over the owner's name
    pub search: Option<String>,
    /// `date` or `created_at`, prefix with `-` for descending
    pub ordering: Option<String>,
}

/// Lists orders, most recent order first by default.
#[utoipa::path(
        get,
        tag = "orders",
        operation_id = "list_orders",
        path = "/orders",
        params(OrdersListQuery),
        responses(
            (status = 200, body = Vec<Order>),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, query))]
pub async fn handler(
    State(db): State<PgPool>,
    Query(query): Query<OrdersListQuery>,
) -> Result<Response, Response> {
    let params = OrderListParams {
        owner_id: query.owner,
        date: query.date,
        search: query.search,
        ordering: query.ordering,
    };

    match list_orders(&db, &params).await {
        Ok(orders) => Ok((StatusCode::OK, Json(orders)).into_response()),
        Err(err) => {
            tracing::error!(error=?err, "unable to list orders");
            Err(internal_error("unable to list orders"))
        }
    }
}
