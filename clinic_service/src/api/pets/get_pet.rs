use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::pets::get::get_pet;
use models_clinic::Pet;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error, not_found};

const NOT_FOUND_MESSAGE: &str = "No Pet matches the given query.";

/// Retrieves one pet by id.
#[utoipa::path(
        get,
        tag = "pets",
        operation_id = "get_pet",
        path = "/pets/{id}",
        params(("id" = String, Path, description = "Pet id")),
        responses(
            (status = 200, body = Pet),
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

    match get_pet(&db, id).await {
        Ok(Some(pet)) => Ok((StatusCode::OK, Json(pet)).into_response()),
        Ok(None) => Err(not_found(NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error=?err, pet_id=%id, "unable to fetch pet");
            Err(internal_error("unable to fetch pet"))
        }
    }
}
