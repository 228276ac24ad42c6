use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use utoipa::ToSchema;
use uuid::Uuid;

/// A veterinary appointment for a pet. `price` is kept at a fixed scale of
/// two decimal places; the wire field `pet` carries the pet id.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
pub struct Appointment {
    pub id: Uuid,
    #[sqlx(rename = "pet_id")]
    pub pet: Uuid,
    pub appointment_date: DateTime<Utc>,
    pub reason: String,
    pub notes: Option<String>,
    pub doctor: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
