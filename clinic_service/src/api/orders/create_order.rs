use axum::{
    Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::orders::create::{CreateOrderError, create_order};
use models_clinic::{Order, ValidationErrors};
use sqlx::PgPool;

use crate::model::request::orders::CreateOrderRequest;
use crate::model::request::pets::invalid_pk;
use crate::model::response::{ErrorResponse, internal_error, validation_error};

/// Creates a new order for an existing owner. `date` is server-assigned.
#[utoipa::path(
        post,
        tag = "orders",
        operation_id = "create_order",
        path = "/orders",
        request_body = CreateOrderRequest,
        responses(
            (status = 201, body = Order),
            (status = 400, body = ValidationErrors),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req))]
pub async fn handler(
    State(db): State<PgPool>,
    extract::Json(req): extract::Json<CreateOrderRequest>,
) -> Result<Response, Response> {
    let new_order = req.validate().map_err(validation_error)?;
    let owner_id = new_order.owner_id;

    match create_order(&db, new_order).await {
        Ok(order) => Ok((StatusCode::CREATED, Json(order)).into_response()),
        Err(CreateOrderError::UnknownOwner) => Err(validation_error(ValidationErrors::single(
            "owner",
            invalid_pk(&owner_id.to_string()),
        ))),
        Err(CreateOrderError::DatabaseError(err)) => {
            tracing::error!(error=?err, "unable to create order");
            Err(internal_error("unable to create order"))
        }
    }
}
