use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenData;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Tokens are JWTs signed with HS256. The signing secret and the token
/// lifetime are fixed at construction; a token's validity is a pure function
/// of its signature and the current time, so there is no state to share
/// between requests.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from a signing secret and token lifetime.
    ///
    /// The secret should be at least 32 bytes for HS256 and come from
    /// configuration, never from source.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a subject, expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - claims serialization or signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode a token and validate its signature and expiry.
    ///
    /// # Errors
    /// * `InvalidSignature` - signature was not produced with this secret
    /// * `Expired` - current time is past the token's `exp` claim
    /// * `Malformed` - token cannot be parsed as a JWT
    /// * `MissingSubject` - token verified but carries no `sub` claim
    pub fn verify(&self, token: &str) -> Result<TokenData, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Default leeway is 60s; expiry here is exact
        validation.leeway = 0;

        let decoded =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let subject = decoded
            .claims
            .sub
            .ok_or(TokenError::MissingSubject)?;

        Ok(TokenData {
            subject,
            expires_at: decoded.claims.exp,
        })
    }
}
