//! Secret Hashing and Verification
//!
//! One-way hashing for secrets that must be checked later: user passwords
//! and product-key material. Uses Argon2id (memory-hard, recommended by
//! OWASP) with a fresh random salt per call. The PHC output string embeds
//! the algorithm, parameters and salt, so verification needs nothing beyond
//! the stored string itself.
//!
//! Because the salt is random, hashing the same input twice yields two
//! different strings that both verify. Callers must use [`verify_secret`],
//! never string equality.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;

/// Secret hashing errors
#[derive(Debug, Error)]
pub enum SecretHashError {
    /// Hashing operation failed
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid secret hash format")]
    InvalidHashFormat,
}

/// Hash a secret with Argon2id
///
/// Generates a random 128-bit salt and returns the PHC-formatted string.
pub fn hash_secret(secret: &[u8]) -> Result<String, SecretHashError> {
    let salt = SaltString::generate(OsRng);

    // OWASP recommended Argon2id parameters:
    // m=19456 (19 MiB), t=2, p=1
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(secret, &salt)
        .map_err(|e| SecretHashError::HashingFailed(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a candidate secret against a PHC hash string
///
/// Mismatch and a malformed hash string are both a normal `false`,
/// never an error. Argon2 compares in constant time internally.
pub fn verify_secret(secret: &[u8], phc: &str) -> bool {
    let parsed_hash = match PasswordHash::new(phc) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default().verify_password(secret, &parsed_hash).is_ok()
}

/// Validate that a string is a well-formed PHC hash
pub fn validate_phc_format(phc: &str) -> Result<(), SecretHashError> {
    PasswordHash::new(phc)
        .map(|_| ())
        .map_err(|_| SecretHashError::InvalidHashFormat)
}
