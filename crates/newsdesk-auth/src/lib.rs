//! Newsdesk Auth — credential verification, HS256 access-token
//! issuance/validation, and refresh-token coordination.

pub mod api;
pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginOutput, Principal, RefreshOutput};
pub use token::AccessTokenClaims;
