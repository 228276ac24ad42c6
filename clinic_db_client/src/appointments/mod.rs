pub mod create;
pub mod delete;
pub mod get;
pub mod list;

pub(crate) const APPOINTMENT_COLUMNS: &str =
    "id, pet_id, appointment_date, reason, notes, doctor, price, created_at, updated_at";
