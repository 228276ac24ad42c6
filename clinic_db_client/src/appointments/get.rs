use models_clinic::Appointment;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::APPOINTMENT_COLUMNS;

#[instrument(skip(db))]
pub async fn get_appointment(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Appointment>> {
    let appointment = sqlx::query_as::<_, Appointment>(&format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(appointment)
}
