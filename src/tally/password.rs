//! Argon2id password hashing.
//!
//! Both functions are CPU-bound; callers run them under
//! `tokio::task::spawn_blocking` so a hash never stalls the runtime.

use argon2::{
    password_hash::{PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use rand::rngs::OsRng;

/// Hash a plaintext password with a fresh random salt.
///
/// # Errors
/// Returns an error if the hashing primitive fails.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

/// Verify a plaintext password against a stored hash. An unparseable
/// stored hash counts as a mismatch.
#[must_use]
pub fn verify(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hashed = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &hashed));
        assert!(!verify("wrong password", &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash("p").unwrap();
        let second = hash("p").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify("p", "not-a-phc-string"));
    }
}
