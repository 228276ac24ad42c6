use models_clinic::Pet;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use super::{PET_COLUMNS, PetRow};
use crate::listing::{contains_pattern, resolve_ordering};

const ORDERABLE: &[(&str, &str)] = &[
    ("name", "name"),
    ("birth_date", "birth_date"),
    ("created_at", "created_at"),
];

#[derive(Debug, Default)]
pub struct PetListParams {
    pub owner_id: Option<Uuid>,
    pub species: Option<String>,
    pub gender: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Lists pets, alphabetical by name by default. Exact filters on owner,
/// species and gender; free-text search over name and breed.
#[instrument(skip(db, params))]
pub async fn list_pets(db: &PgPool, params: &PetListParams) -> anyhow::Result<Vec<Pet>> {
    let mut query = QueryBuilder::new(format!("SELECT {PET_COLUMNS} FROM pets WHERE TRUE"));

    if let Some(owner_id) = params.owner_id {
        query.push(" AND owner_id = ");
        query.push_bind(owner_id);
    }
    if let Some(species) = &params.species {
        query.push(" AND species = ");
        query.push_bind(species);
    }
    if let Some(gender) = &params.gender {
        query.push(" AND gender = ");
        query.push_bind(gender);
    }
    if let Some(search) = &params.search {
        let pattern = contains_pattern(search);
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR breed ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    query.push(" ORDER BY ");
    query.push(resolve_ordering(
        params.ordering.as_deref(),
        ORDERABLE,
        "name ASC",
    ));

    let rows = query.build_query_as::<PetRow>().fetch_all(db).await?;
    rows.into_iter().map(PetRow::try_into_pet).collect()
}
