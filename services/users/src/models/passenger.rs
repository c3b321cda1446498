//! Passenger model

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{
    PASSENGER_PHONE_MAX_LENGTH, validate_email, validate_max_length, validate_passenger_name,
};

/// Passenger contact record
///
/// Serialized as-is by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Passenger {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// New passenger creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPassenger {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewPassenger {
    /// Check field formats and lengths before the record is stored
    pub fn validate(&self) -> Result<(), String> {
        validate_passenger_name(&self.name)?;
        validate_email(&self.email)?;
        validate_max_length("Phone number", &self.phone_number, PASSENGER_PHONE_MAX_LENGTH)
    }
}

/// Passenger update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePassenger {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdatePassenger {
    /// Check the fields that are set
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_passenger_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(phone_number) = &self.phone_number {
            validate_max_length("Phone number", phone_number, PASSENGER_PHONE_MAX_LENGTH)?;
        }
        Ok(())
    }
}
