//! User model and related functionality

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::password;

/// Kind of account a user holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Passenger,
    Rider,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Passenger => "passenger",
            UserType::Rider => "rider",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passenger" => Ok(UserType::Passenger),
            "rider" => Ok(UserType::Rider),
            other => Err(format!("Unknown user type: {}", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub user_type: UserType,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub date_joined: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check a raw password against the stored hash
    pub fn check_password(&self, raw_password: &str) -> bool {
        password::verify_password(raw_password, &self.password)
    }

    /// Whether a password was ever set for this user
    pub fn has_usable_password(&self) -> bool {
        password::is_usable(&self.password)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// Optional fields accepted by the user factories
///
/// Every field left as `None` takes its default:
/// - `user_type`: [`UserType::Passenger`]
/// - `phone_number`: no phone number
/// - `first_name`, `last_name`: empty
/// - `is_staff`: false
/// - `is_active`: true
/// - `is_superuser`: false
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub user_type: Option<UserType>,
    pub phone_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
}

/// New user creation payload, already normalized and hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// User update payload
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<UserType>,
    /// `Some(None)` clears the phone number
    pub phone_number: Option<Option<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub is_superuser: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
}
