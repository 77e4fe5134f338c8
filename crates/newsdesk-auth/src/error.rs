//! Authentication error types.

use newsdesk_core::error::NewsdeskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential mismatch at login. The message deliberately does not
    /// reveal which of email/password was wrong.
    #[error("Invalid email or password")]
    AuthenticationFailed,

    /// Any refresh-path validation failure: bad signature, wrong
    /// algorithm, issuer/audience mismatch, unknown account, refresh
    /// token mismatch, or refresh token expiry. Sub-causes are logged
    /// at debug level and never surfaced in the message.
    #[error("Invalid token.")]
    InvalidToken,

    /// Missing or unusable configuration; fatal at construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// Account store failure while resolving or updating a row.
    #[error("account store error: {0}")]
    Store(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl AuthError {
    /// HTTP status the surrounding layer maps this error to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AuthenticationFailed | Self::InvalidToken => 401,
            Self::Config(_) | Self::Store(_) | Self::Crypto(_) => 500,
        }
    }
}

impl From<AuthError> for NewsdeskError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed | AuthError::InvalidToken => {
                NewsdeskError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::Config(msg) => NewsdeskError::Internal(msg),
            AuthError::Store(msg) => NewsdeskError::Database(msg),
            AuthError::Crypto(msg) => NewsdeskError::Crypto(msg),
        }
    }
}
