use chrono::NaiveDate;
use models_clinic::{Gender, Pet, Species};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{PET_COLUMNS, PetRow};

#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub gender: Gender,
    pub species: Species,
    pub breed: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePetError {
    #[error("owner does not exist")]
    UnknownOwner,
    #[error("Database error: {0}")]
    DatabaseError(#[from] anyhow::Error),
}

/// Inserts a new pet. A reference to a nonexistent owner maps to
/// [CreatePetError::UnknownOwner] via the FK violation.
#[instrument(skip(db, new_pet), fields(owner_id = %new_pet.owner_id))]
pub async fn create_pet(db: &PgPool, new_pet: NewPet) -> Result<Pet, CreatePetError> {
    tracing::trace!("inserting pet");

    let result = sqlx::query_as::<_, PetRow>(&format!(
        "INSERT INTO pets (id, name, gender, species, breed, birth_date, owner_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {PET_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&new_pet.name)
    .bind(new_pet.gender.as_code())
    .bind(new_pet.species.as_code())
    .bind(&new_pet.breed)
    .bind(new_pet.birth_date)
    .bind(new_pet.owner_id)
    .fetch_one(db)
    .await;

    match result {
        Ok(row) => Ok(row.try_into_pet()?),
        Err(err) => {
            if let sqlx::Error::Database(db_err) = &err
                && db_err.is_foreign_key_violation()
            {
                return Err(CreatePetError::UnknownOwner);
            }

            tracing::error!(error=?err, "unable to insert pet");
            Err(CreatePetError::DatabaseError(anyhow::anyhow!(
                "unable to insert pet: {}",
                err
            )))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::owners::create::{create_owner, tests::sample_owner};

    pub(crate) fn sample_pet(name: &str, owner_id: Uuid) -> NewPet {
        NewPet {
            name: name.to_string(),
            gender: Gender::Male,
            species: Species::Dog,
            breed: "Labrador".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2022, 3, 1),
            owner_id,
        }
    }

    // Skipped by default because you have to spin up a db,
    // Run with: `cargo test -p clinic_db_client -- --ignored`
    #[sqlx::test]
    #[ignore]
    async fn test_create_pet_links_owner(pool: PgPool) -> anyhow::Result<()> {
        let owner = create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        let pet = create_pet(&pool, sample_pet("Buddy", owner.id)).await?;
        assert_eq!(pet.owner, owner.id);
        assert_eq!(pet.gender, Gender::Male);
        assert_eq!(pet.species, Species::Dog);

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_create_pet_unknown_owner(pool: PgPool) -> anyhow::Result<()> {
        let result = create_pet(&pool, sample_pet("Buddy", Uuid::new_v4())).await;
        assert!(matches!(result, Err(CreatePetError::UnknownOwner)));
        Ok(())
    }
}
