use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_db_client::pets::list::{PetListParams, list_pets};
use models_clinic::Pet;
use sqlx::PgPool;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::model::response::{ErrorResponse, internal_error};

#[derive(serde::Deserialize, Debug, IntoParams)]
pub struct PetsListQuery {
    /// Exact owner id match
    pub owner: Option<Uuid>,
    /// Exact species code match (`d`, `c`)
    pub species: Option<String>,
    /// Exact gender code match (`M`, `F`)
    pub gender: Option<String>,
    /// Case-insensitive contains over name and breed
    pub search: Option<String>,
    /// `name`, `birth_date` or `created_at`, prefix with `-` for descending
    pub ordering: Option<String>,
}

/// Lists pets, alphabetical by name by default.
#[utoipa::path(
        get,
        tag = "pets",
        operation_id = "list_pets",
        path = "/pets",
        params(PetsListQuery),
        responses(
            (status = 200, body = Vec<Pet>),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, query))]
pub async fn handler(
    State(db): State<PgPool>,
    Query(query): Query<PetsListQuery>,
) -> Result<Response, Response> {
    let params = PetListParams {
        owner_id: query.owner,
        species: query.species,
        gender: query.gender,
        search: query.search,
        ordering: query.ordering,
    };

    match list_pets(&db, &params).await {
        Ok(pets) => Ok((StatusCode::OK, Json(pets)).into_response()),
        Err(err) => {
            tracing::error!(error=?err, "unable to list pets");
            Err(internal_error("unable to list pets"))
        }
    }
}
