//! Authentication building blocks for the blog service
//!
//! Three small, composable pieces:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HS256)
//! - An authenticator that exchanges verified credentials for a token
//!
//! The signing secret and token lifetime are passed in at construction time.
//! Nothing in this crate reads the environment or touches I/O, which keeps
//! the whole flow unit-testable.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("pass_word!").unwrap();
//! assert!(hasher.verify("pass_word!", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = codec.issue("reader@example.com").unwrap();
//! let data = codec.verify(&token).unwrap();
//! assert_eq!(data.subject, "reader@example.com");
//! ```
//!
//! ## Complete login flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Registration: hash the password for storage
//! let stored_hash = auth.hash_password("pass_word!").unwrap();
//!
//! // Login: verify the password and issue a token
//! let result = auth.login("pass_word!", &stored_hash, "reader@example.com").unwrap();
//!
//! // Each subsequent request: validate the presented token
//! let data = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(data.subject, "reader@example.com");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenData;
pub use token::TokenError;
