//! Authentication configuration.

/// Configuration for the authentication service.
///
/// Passed in explicitly at construction — the service reads no ambient
/// global state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared symmetric key for HS256 signing and verification.
    /// Must be non-empty; [`crate::AuthService::new`] refuses to start
    /// without it.
    pub signing_key: String,
    /// JWT issuer (`iss` claim).
    pub issuer: String,
    /// JWT audience (`aud` claim).
    pub audience: String,
    /// Access token lifetime in seconds (default: 7200 = 2 hours).
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds (default: 604_800 = 7 days).
    pub refresh_token_ttl_secs: u64,
    /// Email of the configured administrator override. Empty disables
    /// the override.
    pub admin_email: String,
    /// Argon2id PHC hash of the administrator password.
    pub admin_password_hash: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            signing_key: String::new(),
            issuer: "newsdesk".into(),
            audience: "newsdesk-clients".into(),
            access_token_ttl_secs: 7_200,
            refresh_token_ttl_secs: 604_800,
            admin_email: String::new(),
            admin_password_hash: String::new(),
        }
    }
}
