use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

use crate::error::{Error, Result};

pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))
}

/// Returns `Ok(false)` for a wrong password; errors only when the stored
/// hash itself cannot be parsed.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hashed)
        .map_err(|e| Error::Internal(format!("stored password hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn hashes_are_salted_and_verifiable() {
        let first = assert_ok!(hash_password("hunter22"));
        let second = assert_ok!(hash_password("hunter22"));
        assert_ne!(first, second);
        assert!(assert_ok!(verify_password("hunter22", &first)));
        assert!(!assert_ok!(verify_password("hunter23", &first)));
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert_err!(verify_password("hunter22", "not-a-phc-string"));
    }
}
