use axum::{
    Json,
    extract::{self, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::appointments::create::{CreateAppointmentError, create_appointment};
use models_clinic::{Appointment, ValidationErrors};
use sqlx::PgPool;

use crate::model::request::appointments::CreateAppointmentRequest;
use crate::model::request::pets::invalid_pk;
use crate::model::response::{ErrorResponse, internal_error, validation_error};

/// Creates a new appointment for an existing pet.
#[utoipa::path(
        post,
        tag = "appointments",
        operation_id = "create_appointment",
        path = "/appointments",
        request_body = CreateAppointmentRequest,
        responses(
            (status = 201, body = Appointment),
            (status = 400, body = ValidationErrors),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req))]
pub async fn handler(
    State(db): State<PgPool>,
    extract::Json(req): extract::Json<CreateAppointmentRequest>,
) -> Result<Response, Response> {
    let new_appointment = req.validate().map_err(validation_error)?;
    let pet_id = new_appointment.pet_id;

    match create_appointment(&db, new_appointment).await {
        Ok(appointment) => Ok((StatusCode::CREATED, Json(appointment)).into_response()),
        Err(CreateAppointmentError::UnknownPet) => Err(validation_error(
            ValidationErrors::single("pet", invalid_pk(&pet_id.to_string())),
        )),
        Err(CreateAppointmentError::DatabaseError(err)) => {
            tracing::error!(error=?err, "unable to create appointment");
            Err(internal_error("unable to create appointment"))
        }
    }
}
