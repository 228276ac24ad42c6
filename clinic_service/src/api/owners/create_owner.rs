use axum::{
    Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::owners::create::{CreateOwnerError, create_owner};
use models_clinic::{Owner, ValidationErrors};
use sqlx::PgPool;

use crate::model::request::owners::CreateOwnerRequest;
use crate::model::response::{ErrorResponse, internal_error, validation_error};

/// Creates a new owner.
#[utoipa::path(
        post,
        tag = "owners",
        operation_id = "create_owner",
        path = "/owners",
        request_body = CreateOwnerRequest,
        responses(
            (status = 201, body = Owner),
            (status = 400, body = ValidationErrors),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req))]
pub async fn handler(
    State(db): State<PgPool>,
    extract::Json(req): extract::Json<CreateOwnerRequest>,
) -> Result<Response, Response> {
    let new_owner = req.validate().map_err(validation_error)?;

    match create_owner(&db, new_owner).await {
        Ok(owner) => Ok((StatusCode::CREATED, Json(owner)).into_response()),
        Err(CreateOwnerError::DuplicateCpf) => Err(validation_error(ValidationErrors::single(
            "cpf",
            "owner with this cpf already exists.",
        ))),
        Err(CreateOwnerError::DuplicateEmail) => Err(validation_error(ValidationErrors::single(
            "email",
            "owner with this email already exists.",
        ))),
        Err(CreateOwnerError::DatabaseError(err)) => {
            tracing::error!(error=?err, "unable to create owner");
            Err(internal_error("unable to create owner"))
        }
    }
}
