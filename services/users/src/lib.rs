//! Users service
//!
//! Email-identified users with role typing, and a read-only listing of
//! passenger contact records over HTTP.

use sqlx::migrate::Migrator;

pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod passengers;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

/// Migrations for the `users` and `passengers` tables
pub static MIGRATOR: Migrator = sqlx::migrate!();
