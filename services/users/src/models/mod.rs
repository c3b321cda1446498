//! Users service models

pub mod passenger;
pub mod user;

// Re-export for convenience
pub use passenger::{NewPassenger, Passenger, UpdatePassenger};
pub use user::{NewUser, UpdateUser, User, UserFields, UserType};
