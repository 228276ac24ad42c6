use models_clinic::Owner;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use super::OWNER_COLUMNS;
use crate::listing::{contains_pattern, resolve_ordering};

const ORDERABLE: &[(&str, &str)] = &[("name", "name"), ("created_at", "created_at")];

#[derive(Debug, Default)]
pub struct OwnerListParams {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

/// Lists owners, newest-created first by default. Exact filters on name,
/// cpf and email; free-text search over the same fields.
#[instrument(skip(db, params))]
pub async fn list_owners(db: &PgPool, params: &OwnerListParams) -> anyhow::Result<Vec<Owner>> {
    let mut query =
        QueryBuilder::new(format!("SELECT {OWNER_COLUMNS} FROM owners WHERE TRUE"));

    if let Some(name) = &params.name {
        query.push(" AND name = ");
        query.push_bind(name);
    }
    if let Some(cpf) = &params.cpf {
        query.push(" AND cpf = ");
        query.push_bind(cpf);
    }
    if let Some(email) = &params.email {
        query.push(" AND email = ");
        query.push_bind(email);
    }
    if let Some(search) = &params.search {
        let pattern = contains_pattern(search);
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR cpf ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR email ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    query.push(" ORDER BY ");
    query.push(resolve_ordering(
        params.ordering.as_deref(),
        ORDERABLE,
        "created_at DESC",
    ));

    let owners = query.build_query_as::<Owner>().fetch_all(db).await?;
    Ok(owners)
}
