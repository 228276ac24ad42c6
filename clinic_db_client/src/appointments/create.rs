use chrono::{DateTime, Utc};
use models_clinic::Appointment;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::APPOINTMENT_COLUMNS;

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub pet_id: Uuid,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub notes: Option<String>,
    pub doctor: Option<String>,
    pub price: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAppointmentError {
    #[error("pet does not exist")]
    UnknownPet,
    #[error("Database error: {0}")]
    DatabaseError(#[from] anyhow::Error),
}

/// Inserts a new appointment. A reference to a nonexistent pet maps to
/// [CreateAppointmentError::UnknownPet] via the FK violation.
#[instrument(skip(db, new_appointment), fields(pet_id = %new_appointment.pet_id))]
pub async fn create_appointment(
    db: &PgPool,
    new_appointment: NewAppointment,
) -> Result<Appointment, CreateAppointmentError> {
    tracing::trace!("inserting appointment");

    let result = sqlx::query_as::<_, Appointment>(&format!(
        "INSERT INTO appointments (id, pet_id, appointment_date, reason, notes, doctor, price) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {APPOINTMENT_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(new_appointment.pet_id)
    .bind(new_appointment.appointment_date)
    .bind(&new_appointment.reason)
    .bind(&new_appointment.notes)
    .bind(&new_appointment.doctor)
    .bind(new_appointment.price)
    .fetch_one(db)
    .await;

    match result {
        Ok(appointment) => Ok(appointment),
        Err(err) => {
            if let sqlx::Error::Database(db_err) = &err
                && db_err.is_foreign_key_violation()
            {
                return Err(CreateAppointmentError::UnknownPet);
            }

            tracing::error!(error=?err, "unable to insert appointment");
            Err(CreateAppointmentError::DatabaseError(anyhow::anyhow!(
                "unable to insert appointment: {}",
                err
            )))
        }
    }
}
