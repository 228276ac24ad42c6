use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::orders::get::get_order;
use models_clinic::Order;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error, not_found};

const NOT_FOUND_MESSAGE: &str = "No Order matches the given query.";

/// Retrieves one order by id.
#[utoipa::path(
        get,
        tag = "orders",
        operation_id = "get_order",
        path = "/orders/{id}",
        params(("id" = String, Path, description = "Order id")),
        responses(
            (status = 200, body = Order),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn handler(
    State(db): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(not_found(NOT_FOUND_MESSAGE));
    };

    match get_order(&db, id).await {
        Ok(Some(order)) => Ok((StatusCode::OK, Json(order)).into_response()),
        Ok(None) => Err(not_found(NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error=?err, order_id=%id, "unable to fetch order");
            Err(internal_error("unable to fetch order"))
        }
    }
}
