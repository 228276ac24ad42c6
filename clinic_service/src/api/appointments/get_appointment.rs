use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::appointments::get::get_appointment;
use models_clinic::Appointment;
use sqlx::PgPool;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error, not_found};

const NOT_FOUND_MESSAGE: &str = "No Appointment matches the given query.";

/// Retrieves one appointment by id.
#[utoipa::path(
        get,
        tag = "appointments",
        operation_id = "get_appointment",
        path = "/appointments/{id}",
        params(("id" = String, Path, description = "Appointment id")),
        responses(
            (status = 200, body = Appointment),
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

    match get_appointment(&db, id).await {
        Ok(Some(appointment)) => Ok((StatusCode::OK, Json(appointment)).into_response()),
        Ok(None) => Err(not_found(NOT_FOUND_MESSAGE)),
        Err(err) => {
            tracing::error!(error=?err, appointment_id=%id, "unable to fetch appointment");
            Err(internal_error("unable to fetch appointment"))
        }
    }
}
