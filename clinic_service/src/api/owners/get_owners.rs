use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::owners::list::{OwnerListParams, list_owners};
use models_clinic::Owner;
use sqlx::PgPool;
use utoipa::IntoParams;

use crate::model::response::{ErrorResponse, internal_error};

#[derive(serde::Deserialize, Debug, IntoParams)]
pub struct OwnersListQuery {
    /// Exact name match
    pub name: Option<String>,
    /// Exact cpf match
    pub cpf: Option<String>,
    /// Exact email match
    pub email: Option<String>,
    /// Case-insensitive contains over name, cpf and email
    pub search: Option<String>,
    /// `name` or `created_at`, prefix with `-` for descending
    pub ordering: Option<String>,
}

/// Lists owners, newest-created first by default.
#[utoipa::path(
        get,
        tag = "owners",
        operation_id = "list_owners",
        path = "/owners",
        params(OwnersListQuery),
        responses(
            (status = 200, body = Vec<Owner>),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, query))]
pub async fn handler(
    State(db): State<PgPool>,
    Query(query): Query<OwnersListQuery>,
) -> Result<Response, Response> {
    let params = OwnerListParams {
        name: query.name,
        cpf: query.cpf,
        email: query.email,
        search: query.search,
        ordering: query.ordering,
    };

    match list_owners(&db, &params).await {
        Ok(owners) => Ok((StatusCode::OK, Json(owners)).into_response()),
        Err(err) => {
            tracing::error!(error=?err, "unable to list owners");
            Err(internal_error("unable to list owners"))
        }
    }
}
