use models_clinic::Owner;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::OWNER_COLUMNS;

#[instrument(skip(db))]
pub async fn get_owner(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Owner>> {
    let owner = sqlx::query_as::<_, Owner>(&format!(
        "SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(owner)
}

/// Used by the seeding utility to regenerate colliding cpf values.
#[instrument(skip(db))]
pub async fn cpf_exists(db: &PgPool, cpf: &str) -> anyhow::Result<bool> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM owners WHERE cpf = $1)")
            .bind(cpf)
            .fetch_one(db)
            .await?;

    Ok(exists.0)
}

/// Used by the seeding utility to regenerate colliding email values.
#[instrument(skip(db))]
pub async fn email_exists(db: &PgPool, email: &str) -> anyhow::Result<bool> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS (SELECT 1 FROM owners WHERE email = $1)")
            .bind(email)
            .fetch_one(db)
            .await?;

    Ok(exists.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::owners::create::{create_owner, tests::sample_owner};

    // Skipped by default because you have to spin up a db,
    // Run with: `cargo test -p clinic_db_client -- --ignored`
    #[sqlx::test]
    #[ignore]
    async fn test_get_owner(pool: PgPool) -> anyhow::Result<()> {
        let created = create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        let fetched = get_owner(&pool, created.id).await?;
        assert_eq!(fetched, Some(created));

        let missing = get_owner(&pool, Uuid::new_v4()).await?;
        assert_eq!(missing, None);

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_existence_probes(pool: PgPool) -> anyhow::Result<()> {
        create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        assert!(cpf_exists(&pool, "00011122233").await?);
        assert!(!cpf_exists(&pool, "99988877766").await?);
        assert!(email_exists(&pool, "owner@example.com").await?);
        assert!(!email_exists(&pool, "other@example.com").await?);

        Ok(())
    }
}
