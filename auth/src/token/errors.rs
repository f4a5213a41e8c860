use thiserror::Error;

/// Error type for token issuance and verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token has no subject claim")]
    MissingSubject,
}
