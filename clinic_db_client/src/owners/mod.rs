pub mod create;
pub mod delete;
pub mod get;
pub mod list;

pub(crate) const OWNER_COLUMNS: &str =
    "id, name, cpf, phone, email, address, created_at, updated_at";
