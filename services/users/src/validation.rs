//! Input validation utilities

use regex::Regex;
use std::sync::OnceLock;

pub const EMAIL_MAX_LENGTH: usize = 254;
pub const PHONE_NUMBER_MAX_LENGTH: usize = 15;
pub const NAME_PART_MAX_LENGTH: usize = 150;
pub const PASSENGER_NAME_MAX_LENGTH: usize = 100;
pub const PASSENGER_PHONE_MAX_LENGTH: usize = 20;

/// Normalize an email address
///
/// Surrounding whitespace is dropped and the domain part (after the last
/// `@`) is lowercased. The local part keeps its case. Input without an `@`
/// is only trimmed.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Validate email
///
/// Structural check only: a non-empty local part, an `@`, and a domain made
/// of non-empty dot-separated labels. Non-ASCII letters are accepted on both
/// sides of the `@`.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("The email must be set".to_string());
    }

    if email.chars().count() > EMAIL_MAX_LENGTH {
        return Err(format!(
            "Email must be at most {} characters long",
            EMAIL_MAX_LENGTH
        ));
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err("Invalid email format".to_string());
    };

    static LOCAL_REGEX: OnceLock<Regex> = OnceLock::new();
    let local_regex = LOCAL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@\p{Cc}]+$").expect("Failed to compile email local part regex")
    });

    static DOMAIN_REGEX: OnceLock<Regex> = OnceLock::new();
    let domain_regex = DOMAIN_REGEX.get_or_init(|| {
        Regex::new(r"^[\p{L}\p{N}-]+(\.[\p{L}\p{N}-]+)*$")
            .expect("Failed to compile email domain regex")
    });

    if !local_regex.is_match(local) || !domain_regex.is_match(domain) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate a user phone number
///
/// Accepts 9 to 15 digits with an optional leading `+` and an optional
/// `1` country prefix.
pub fn validate_phone_number(phone_number: &str) -> Result<(), String> {
    if phone_number.len() > PHONE_NUMBER_MAX_LENGTH {
        return Err(format!(
            "Phone number must be at most {} characters long",
            PHONE_NUMBER_MAX_LENGTH
        ));
    }

    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?1?[0-9]{9,15}$").expect("Failed to compile phone number regex")
    });

    if !regex.is_match(phone_number) {
        return Err(
            "Phone number must be entered in the format '+999999999'. Up to 15 digits allowed."
                .to_string(),
        );
    }

    Ok(())
}

/// Validate the length of a free text field
pub fn validate_max_length(field: &str, value: &str, max_length: usize) -> Result<(), String> {
    if value.chars().count() > max_length {
        return Err(format!(
            "{} must be at most {} characters long",
            field, max_length
        ));
    }

    Ok(())
}

/// Validate a passenger name
pub fn validate_passenger_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }

    validate_max_length("Name", name, PASSENGER_NAME_MAX_LENGTH)
}
