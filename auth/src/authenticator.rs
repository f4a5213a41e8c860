use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenData;
use crate::token::TokenError;

/// Coordinates password verification and token issuance.
///
/// The one mutable-free object the service shares across requests: it holds
/// the signing secret (inside the codec) and the token lifetime, both fixed
/// at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Signed bearer token to hand back to the caller
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - secret used to sign and verify tokens
    /// * `token_ttl` - lifetime applied to every issued token
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret, token_ttl),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match the stored digest
    /// * `Password` - the stored digest could not be parsed
    /// * `Token` - token issuance failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a presented token and return its verified contents.
    ///
    /// # Errors
    /// * `TokenError` - signature, expiry, parse, or subject check failed
    pub fn verify_token(&self, token: &str) -> Result<TokenData, TokenError> {
        self.token_codec.verify(token)
    }
}
