use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::owners::get::get_owner;
use models_clinic::Owner;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error, not_found};

const NOT_FOUND_MESSAGE: &str = "No Owner matches the given query.";

/// Retrieves one owner by id.
#[utoipa::path(
        get,
        tag = "owners",
        operation_id = "get_owner",
        path = "/owners/{id}",
        params(("id" = String, Path, description = "Owner id")),
        responses(
            (status = 200, body = Owner),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn handler(
    State(db): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    // a malformed uuid cannot match anything, so it is a 404 like any other
    // unknown identifier
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(not_found(NOT_FOUND_MESSAGE));
    };

    match get_owner(&db, id).await {
        Ok(Some(owner)) => Ok((StatusCode::OK, Json(owner)).into_response()),
        Ok(None) => Err(not_found(NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error=?err, owner_id=%id, "unable to fetch owner");
            Err(internal_error("unable to fetch owner"))
        }
    }
}
