use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way password hasher backed by Argon2id.
///
/// Each call to [`hash`](PasswordHasher::hash) draws a fresh random salt, so
/// hashing the same plaintext twice produces different digests. Verification
/// reads the salt and parameters back out of the PHC-encoded digest.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format digest (algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - the hashing operation itself failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// Comparison is constant-time inside the argon2 crate.
    ///
    /// # Returns
    /// True iff the digest was produced from this password
    ///
    /// # Errors
    /// * `VerificationFailed` - the stored digest is not a valid PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::VerificationFailed(format!("Invalid digest: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
