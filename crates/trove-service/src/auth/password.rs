use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{ServiceError, ServiceResult};

/// PHC-format Argon2id record with the default parameters and a fixed salt.
/// It is not the hash of any password, so verification can never succeed; it
/// exists so a login against an unknown email spends the same time as a real
/// verification instead of leaking account existence through timing.
pub const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dHJvdmUtZGVjb3ktc2FsdA$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// ## Summary
/// Hashes a password using Argon2id with a random salt.
///
/// ## Errors
/// Returns `ValidationError` for an empty password, or an error if hashing
/// itself fails.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    if password.is_empty() {
        return Err(ServiceError::ValidationError(
            "Password must not be empty".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to hash password: {e}")))?;

    Ok(password_hash.to_string())
}

/// ## Summary
/// Verifies a password against a stored Argon2 hash. The comparison inside
/// the Argon2 crate is constant-time.
///
/// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch; a mismatch is
/// never an error.
///
/// ## Errors
/// Returns an error only if the stored hash record itself cannot be parsed or
/// recomputed, which indicates a corrupt credential record.
pub fn verify_password(password: &str, password_hash: &str) -> ServiceResult<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| ServiceError::InvalidConfiguration(format!("Invalid password hash: {e}")))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(err) => Err(ServiceError::InvalidConfiguration(format!(
            "Failed to verify password: {err}"
        ))),
    }
}
