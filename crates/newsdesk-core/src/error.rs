//! Error types for the Newsdesk system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsdeskError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type NewsdeskResult<T> = Result<T, NewsdeskError>;
