use models_clinic::Pet;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{PET_COLUMNS, PetRow};

#[instrument(skip(db))]
pub async fn get_pet(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Pet>> {
    let row = sqlx::query_as::<_, PetRow>(&format!(
        "SELECT {PET_COLUMNS} FROM pets WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;

    row.map(PetRow::try_into_pet).transpose()
}
