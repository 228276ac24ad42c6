use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use models_clinic::ValidationErrors;
use utoipa::ToSchema;

/// A plain old json error response.
#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    /// Indicates if an error occurred
    pub error: bool,
    /// Message to explain failure
    pub message: String,
}

pub fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

pub fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// 400 with the bare field-error map as the body.
pub fn validation_error(errors: ValidationErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}
