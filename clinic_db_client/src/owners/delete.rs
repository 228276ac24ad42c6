use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

/// Deletes an owner and everything hanging off it: the appointments of the
/// owner's pets, the pets, the owner's orders, then the owner itself, all
/// in one transaction. Returns false when the owner does not exist.
#[instrument(skip(db))]
pub async fn delete_owner(db: &PgPool, id: Uuid) -> anyhow::Result<bool> {
    let mut tx = db.begin().await?;

    sqlx::query(
        "DELETE FROM appointments WHERE pet_id IN (SELECT id FROM pets WHERE owner_id = $1)",
    )
    .bind(id)
    .execute(tx.as_mut())
    .await?;

    sqlx::query("DELETE FROM pets WHERE owner_id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;

    sqlx::query("DELETE FROM orders WHERE owner_id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;

    let result = sqlx::query("DELETE FROM owners WHERE id = $1")
        .bind(id)
        .execute(tx.as_mut())
        .await?;

    tx.commit().await?;

    tracing::trace!(deleted = result.rows_affected() > 0, "deleted owner");
    Ok(result.rows_affected() > 0)
}

/// Removes every owner row. The seeding utility's flush deletes dependents
/// first, so this runs last.
#[instrument(skip(db))]
pub async fn delete_all_owners(db: &PgPool) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM owners").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::create::{NewAppointment, create_appointment};
    use crate::appointments::list::{AppointmentListParams, list_appointments};
    use crate::owners::create::{create_owner, tests::sample_owner};
    use crate::owners::get::get_owner;
    use crate::pets::create::{NewPet, create_pet};
    use crate::pets::get::get_pet;
    use chrono::Utc;
    use models_clinic::{Gender, Species};
    use rust_decimal::Decimal;

    // Skipped by default because you have to spin up a db,
    // Run with: `cargo test -p clinic_db_client -- --ignored`
    #[sqlx::test]
    #[ignore]
    async fn test_delete_owner_cascades(pool: PgPool) -> anyhow::Result<()> {
        let owner = create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;
        let pet = create_pet(
            &pool,
            NewPet {
                name: "Buddy".to_string(),
                gender: Gender::Male,
                species: Species::Dog,
                breed: "Labrador".to_string(),
                birth_date: None,
                owner_id: owner.id,
            },
        )
        .await?;
        create_appointment(
            &pool,
            NewAppointment {
                pet_id: pet.id,
                appointment_date: Utc::now(),
                reason: "Checkup".to_string(),
                notes: None,
                doctor: None,
                price: Decimal::new(12000, 2),
            },
        )
        .await?;

        assert!(delete_owner(&pool, owner.id).await?);

        assert_eq!(get_owner(&pool, owner.id).await?, None);
        assert_eq!(get_pet(&pool, pet.id).await?, None);
        let appointments =
            list_appointments(&pool, &AppointmentListParams::default()).await?;
        assert!(appointments.is_empty());

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_delete_owner_missing_returns_false(pool: PgPool) -> anyhow::Result<()> {
        assert!(!delete_owner(&pool, Uuid::new_v4()).await?);
        Ok(())
    }
}
