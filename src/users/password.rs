use anyhow::anyhow;
use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use tracing::error;

/// Argon2id with the crate defaults (m=19456, t=2, p=1).
fn argon2() -> Argon2<'static> {
    Argon2::default()
}

/// Produces the value stored in `users.hashed_password`: a PHC string
/// carrying algorithm, cost parameters, a fresh salt and the digest.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "password hashing failed");
            anyhow!("hash password: {e}")
        })
}

/// Checks a plaintext against a stored `hashed_password`. A mismatch is
/// `Ok(false)`; a stored value that is not a PHC string is an error.
pub fn verify_password(plain: &str, hashed_password: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(hashed_password).map_err(|e| anyhow!("parse stored hash: {e}"))?;
    match argon2().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow!("verify password: {e}")),
    }
}
