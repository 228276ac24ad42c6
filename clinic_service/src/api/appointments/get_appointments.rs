use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use clinic_db_client::appointments::list::{AppointmentListParams, list_appointments};
use models_clinic::Appointment;
use sqlx::PgPool;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error};

#[derive(serde::Deserialize, Debug, IntoParams)]
pub struct AppointmentsListQuery {
    /// Exact pet id match
    pub pet: Option<Uuid>,
    /// Exact appointment datetime match, RFC 3339
    pub appointment_date: Option<DateTime<Utc>>,
    /// Case-insensitive contains over the pet's name
    pub search: Option<String>,
    /// `appointment_date` or `created_at`, prefix with `-` for descending
    pub ordering: Option<String>,
}

/// Lists appointments, most recent appointment first by default.
#[utoipa::path(
        get,
        tag = "appointments",
        operation_id = "list_appointments",
        path = "/appointments",
        params(AppointmentsListQuery),
        responses(
            (status = 200, body = Vec<Appointment>),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, query))]
pub async fn handler(
    State(db): State<PgPool>,
    Query(query): Query<AppointmentsListQuery>,
) -> Result<Response, Response> {
    let params = AppointmentListParams {
        pet_id: query.pet,
        appointment_date: query.appointment_date,
        search: query.search,
        ordering: query.ordering,
    };

    match list_appointments(&db, &params).await {
        Ok(appointments) => Ok((StatusCode::OK, Json(appointments)).into_response()),
        Err(err) => {
            tracing::error!(error=?err, "unable to list appointments");
            Err(internal_error("unable to list appointments"))
        }
    }
}
