//! Admin password authentication.
//!
//! There is a single admin account. Its password is never stored; the
//! configuration holds an Argon2id PHC string and logins are checked
//! against it.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors from hashing or checking the admin password.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The password does not match the configured hash.
    #[error("invalid password")]
    InvalidCredentials,

    /// The password could not be hashed.
    #[error("failed to hash password")]
    PasswordHash,

    /// Blank passwords are rejected before hashing.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Hash a password using Argon2id with a random salt.
///
/// # Errors
///
/// Returns `AuthError::EmptyPassword` for a blank password and
/// `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::EmptyPassword);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a PHC hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the hash is malformed or the
/// password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("espresso-42").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("espresso-42", &hash).is_ok());
        assert!(matches!(
            verify_password("espresso-43", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(matches!(hash_password(""), Err(AuthError::EmptyPassword)));
        assert!(matches!(
            verify_password("anything", "not-a-hash"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
