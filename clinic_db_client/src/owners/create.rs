use models_clinic::Owner;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::OWNER_COLUMNS;

#[derive(Debug, Clone)]
pub struct NewOwner {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateOwnerError {
    #[error("owner with this cpf already exists")]
    DuplicateCpf,
    #[error("owner with this email already exists")]
    DuplicateEmail,
    #[error("Database error: {0}")]
    DatabaseError(#[from] anyhow::Error),
}

/// Inserts a new owner. Uniqueness of cpf and email is enforced by the
/// table constraints; violations map to the typed duplicate errors.
#[instrument(skip(db, new_owner), fields(cpf = %new_owner.cpf))]
pub async fn create_owner(db: &PgPool, new_owner: NewOwner) -> Result<Owner, CreateOwnerError> {
    tracing::trace!("inserting owner");

    let result = sqlx::query_as::<_, Owner>(&format!(
        "INSERT INTO owners (id, name, cpf, phone, email, address) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {OWNER_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(&new_owner.name)
    .bind(&new_owner.cpf)
    .bind(&new_owner.phone)
    .bind(&new_owner.email)
    .bind(&new_owner.address)
    .fetch_one(db)
    .await;

    match result {
        Ok(owner) => Ok(owner),
        Err(err) => {
            if let sqlx::Error::Database(db_err) = &err
                && db_err.is_unique_violation()
            {
                return match db_err.constraint() {
                    Some("owners_cpf_key") => Err(CreateOwnerError::DuplicateCpf),
                    Some("owners_email_key") => Err(CreateOwnerError::DuplicateEmail),
                    _ => Err(CreateOwnerError::DatabaseError(anyhow::anyhow!(
                        "unexpected unique violation inserting owner: {}",
                        err
                    ))),
                };
            }

            tracing::error!(error=?err, "unable to insert owner");
            Err(CreateOwnerError::DatabaseError(anyhow::anyhow!(
                "unable to insert owner: {}",
                err
            )))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_owner(cpf: &str, email: &str) -> NewOwner {
        NewOwner {
            name: "Test Owner".to_string(),
            cpf: cpf.to_string(),
            phone: "11999990000".to_string(),
            email: email.to_string(),
            address: "Rua Teste 1".to_string(),
        }
    }

    // Skipped by default because you have to spin up a db,
    // Run with: `cargo test -p clinic_db_client -- --ignored`
    #[sqlx::test]
    #[ignore]
    async fn test_create_owner_returns_server_fields(pool: PgPool) -> anyhow::Result<()> {
        let owner = create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        assert_eq!(owner.cpf, "00011122233");
        assert_eq!(owner.email, "owner@example.com");
        assert!(!owner.id.is_nil());

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_create_owner_duplicate_cpf(pool: PgPool) -> anyhow::Result<()> {
        create_owner(&pool, sample_owner("00011122233", "first@example.com")).await?;

        let result = create_owner(&pool, sample_owner("00011122233", "second@example.com")).await;
        assert!(matches!(result, Err(CreateOwnerError::DuplicateCpf)));

        Ok(())
    }

    #[sqlx::test]
    #[ignore]
    async fn test_create_owner_duplicate_email(pool: PgPool) -> anyhow::Result<()> {
        create_owner(&pool, sample_owner("00011122233", "owner@example.com")).await?;

        let result = create_owner(&pool, sample_owner("99988877766", "owner@example.com")).await;
        assert!(matches!(result, Err(CreateOwnerError::DuplicateEmail)));

        Ok(())
    }
}
