//! Repositories for database operations
//!
//! Handlers and the user manager only see the store traits. The PostgreSQL
//! repositories implement them for the running service.

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::{NewPassenger, NewUser, Passenger, UpdatePassenger, UpdateUser, User};

pub mod passenger;
pub mod user;

#[cfg(test)]
pub mod memory;

pub use passenger::PassengerRepository;
pub use user::UserRepository;

/// Persistence contract for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; unique violations on email or phone number are reported
    /// as `DatabaseError::UniqueViolation`
    async fn insert(&self, new_user: &NewUser) -> DatabaseResult<User>;

    /// Exact match on the stored (already normalized) email
    async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>>;

    /// Apply the set fields of `changes` and refresh `updated_at`
    async fn update(&self, id: i64, changes: &UpdateUser) -> DatabaseResult<Option<User>>;
}

/// Persistence contract for passengers
#[async_trait]
pub trait PassengerStore: Send + Sync {
    /// Every passenger, ordered by id
    async fn list_all(&self) -> DatabaseResult<Vec<Passenger>>;

    async fn insert(&self, new_passenger: &NewPassenger) -> DatabaseResult<Passenger>;

    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Passenger>>;

    async fn update(
        &self,
        id: i32,
        changes: &UpdatePassenger,
    ) -> DatabaseResult<Option<Passenger>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> DatabaseResult<bool>;
}
