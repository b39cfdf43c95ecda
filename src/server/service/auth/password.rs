use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::auth::AuthError;

/// Hashes a plain password into an Argon2id PHC string with a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string suitable for the `users.password` column
/// - `Err(AuthError::PasswordHash)` - Hasher failure
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

/// Checks a plain password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests hashing and verifying a password.
    ///
    /// Expected: original password verifies, a different one does not
    #[test]
    fn verifies_only_the_original_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("battery staple", &hash));
    }

    /// Tests that the same password hashes differently each time.
    ///
    /// Expected: distinct salts produce distinct PHC strings
    #[test]
    fn salts_every_hash() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();

        assert_ne!(first, second);
    }

    /// Tests verification against a malformed stored value.
    ///
    /// Expected: false instead of an error
    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("password123", "not-a-hash"));
    }
}
