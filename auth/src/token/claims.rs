use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Wire-format claims embedded in every issued token.
///
/// Only two claims are carried: the subject identifier and the expiry
/// timestamp. Anything else a handler needs is looked up from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the authenticated identity's email)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject, expiring `ttl` from now.
    pub fn for_subject(subject: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sub: Some(subject.into()),
            exp: (Utc::now() + ttl).timestamp(),
        }
    }

    /// Get the subject claim, if present.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }
}

/// Successfully verified token contents.
///
/// Produced only by [`TokenCodec::verify`](crate::token::TokenCodec::verify),
/// so holding one means the signature checked out, the token has not expired,
/// and the subject claim is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// Subject identifier carried in the token
    pub subject: String,

    /// Expiration time (Unix timestamp)
    pub expires_at: i64,
}
