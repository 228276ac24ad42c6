use chrono::{DateTime, NaiveDate, Utc};
use models_clinic::{Gender, Pet, Species};
use uuid::Uuid;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;

pub(crate) const PET_COLUMNS: &str =
    "id, name, gender, species, breed, birth_date, owner_id, created_at, updated_at";

/// Raw pets row; gender and species come back as their single-letter codes
/// and are promoted to the enums on conversion.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct PetRow {
    pub id: Uuid,
    pub name: String,
    pub gender: String,
    pub species: String,
    pub breed: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PetRow {
    pub(crate) fn try_into_pet(self) -> anyhow::Result<Pet> {
        let gender = Gender::from_code(&self.gender)
            .ok_or_else(|| anyhow::anyhow!("invalid gender code in database: {}", self.gender))?;
        let species = Species::from_code(&self.species)
            .ok_or_else(|| anyhow::anyhow!("invalid species code in database: {}", self.species))?;

        Ok(Pet {
            id: self.id,
            name: self.name,
            gender,
            species,
            breed: self.breed,
            birth_date: self.birth_date,
            owner: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
