//! Argon2 password hashing and the registration password policy

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use jobboard_core::AppError;
use rand_core::OsRng;
use std::sync::LazyLock;

const MIN_PASSWORD_LEN: usize = 8;

static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("no-account-has-this-password").unwrap_or_default());

/// Argon2 hash with the production parameters that no submitted password matches.
/// Logins for unknown emails verify against it so both failure paths cost the same.
pub fn dummy_password_hash() -> &'static str {
    DUMMY_HASH.as_str()
}

/// Hash a password into a PHC string for storage
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored hash. A wrong password is `Ok(false)`;
/// an unparseable hash is an internal error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a special character
pub fn check_password_policy(password: &str) -> Result<(), AppError> {
    let violation = if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters long")
    } else if !password.chars().any(|c| c.is_lowercase()) {
        Some("Password must contain at least one lowercase letter")
    } else if !password.chars().any(|c| c.is_uppercase()) {
        Some("Password must contain at least one uppercase letter")
    } else if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        Some("Password must contain at least one special character")
    } else {
        None
    };

    match violation {
        Some(msg) => Err(AppError::InvalidInput(msg.to_string())),
        None => Ok(()),
    }
}
