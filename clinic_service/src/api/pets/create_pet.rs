use axum::{
    Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::pets::create::{CreatePetError, create_pet};
use models_clinic::{Pet, ValidationErrors};
use sqlx::PgPool;

use crate::model::request::pets::{CreatePetRequest, invalid_pk};
use crate::model::response::{ErrorResponse, internal_error, validation_error};

/// Creates a new pet linked to an existing owner.
#[utoipa::path(
        post,
        tag = "pets",
        operation_id = "create_pet",
        path = "/pets",
        request_body = CreatePetRequest,
        responses(
            (status = 201, body = Pet),
            (status = 400, body = ValidationErrors),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req))]
pub async fn handler(
    State(db): State<PgPool>,
    extract::Json(req): extract::Json<CreatePetRequest>,
) -> Result<Response, Response> {
    let new_pet = req.validate().map_err(validation_error)?;
    let owner_id = new_pet.owner_id;

    match create_pet(&db, new_pet).await {
        Ok(pet) => Ok((StatusCode::CREATED, Json(pet)).into_response()),
        Err(CreatePetError::UnknownOwner) => Err(validation_error(ValidationErrors::single(
            "owner",
            invalid_pk(&owner_id.to_string()),
        ))),
        Err(CreatePetError::DatabaseError(err)) => {
            tracing::error!(error=?err, "unable to create pet");
            Err(internal_error("unable to create pet"))
        }
    }
}
