//! Password hashing with argon2

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{self, SaltString},
};
use rand::{Rng, distributions::Alphanumeric};

/// Prefix marking a password that can never match
const UNUSABLE_PASSWORD_PREFIX: char = '!';
const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Hash a raw password with a fresh random salt
///
/// The result is a PHC string carrying algorithm, parameters and salt.
pub fn hash_password(raw_password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    Ok(argon2
        .hash_password(raw_password.as_bytes(), &salt)?
        .to_string())
}

/// Build a stored password value that no input verifies against
pub fn make_unusable() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix)
}

/// Hash `raw_password`, or produce an unusable value when it is `None`
pub fn encode(raw_password: Option<&str>) -> Result<String, password_hash::Error> {
    match raw_password {
        Some(raw) => hash_password(raw),
        None => Ok(make_unusable()),
    }
}

pub fn is_usable(stored: &str) -> bool {
    !stored.starts_with(UNUSABLE_PASSWORD_PREFIX)
}

/// Verify a raw password against a stored hash
///
/// Unusable or malformed stored values never verify.
pub fn verify_password(raw_password: &str, stored: &str) -> bool {
    if !is_usable(stored) {
        return false;
    }

    match PasswordHash::new(stored) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
