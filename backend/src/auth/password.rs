//! Password hashing using argon2
//!
//! Hashes are PHC strings (`$argon2id$...`) with a random per-password
//! salt. Hashing is CPU bound, so the async entry points run it on the
//! blocking thread pool.

use anyhow::{Context, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;

/// Hash checked against when there is no stored hash to check against
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Password hashing service (Argon2id, default parameters)
pub struct PasswordService;

impl PasswordService {
    /// Hash a password (blocking)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Check a password against a stored hash (blocking)
    ///
    /// `Ok(false)` means the password is wrong; `Err` means the stored hash
    /// itself could not be parsed.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Hash with the same parameters as [`hash`](Self::hash), computed
    /// once per process
    pub fn dummy_hash() -> Result<&'static str> {
        if let Some(hash) = DUMMY_HASH.get() {
            return Ok(hash);
        }
        let hash = Self::hash("placeholder-password")?;
        Ok(DUMMY_HASH.get_or_init(|| hash))
    }

    /// Run a full verification against [`dummy_hash`](Self::dummy_hash)
    ///
    /// Used when the account does not exist, so the caller spends the same
    /// argon2 cost as a wrong password would.
    pub fn verify_dummy(password: &str) -> Result<()> {
        Self::verify(password, Self::dummy_hash()?).map(|_| ())
    }

    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .context("Password hashing task failed")?
    }

    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .context("Password verification task failed")?
    }

    pub async fn verify_dummy_async(password: String) -> Result<()> {
        tokio::task::spawn_blocking(move || Self::verify_dummy(&password))
            .await
            .context("Password verification task failed")?
    }
}
