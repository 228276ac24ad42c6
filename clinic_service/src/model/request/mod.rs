pub mod appointments;
pub mod orders;
pub mod owners;
pub mod pets;
