//! Domain models shared between the clinic service and its db client.

pub mod appointment;
pub mod order;
pub mod owner;
pub mod pet;
pub mod validate;

pub use appointment::Appointment;
pub use order::{Order, OrderItem};
pub use owner::Owner;
pub use pet::{Gender, Pet, Species};
pub use validate::ValidationErrors;
