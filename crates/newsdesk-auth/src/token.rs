//! HS256 access token issuance/validation and opaque refresh token
//! generation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Raw byte length of an opaque refresh token before encoding.
const REFRESH_TOKEN_BYTES: usize = 64;

/// JWT claims embedded in every access token.
///
/// Verifiable by any party holding the same signing key and
/// issuer/audience configuration — no store lookup involved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject — account ID (decimal string).
    pub sub: String,
    /// Account email; the refresh path resolves the account by this.
    pub email: String,
    /// Role code.
    pub role: i64,
    /// Issuer.
    pub iss: String,
    /// Audience.
    pub aud: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID (UUID string).
    pub jti: String,
}

/// Issue a signed HS256 JWT access token.
pub fn issue_access_token(
    account_id: i64,
    email: &str,
    role: i64,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = AccessTokenClaims {
        sub: account_id.to_string(),
        email: email.to_owned(),
        role,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now,
        exp: now + config.access_token_ttl_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.signing_key.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Validation pinned to HS256 with the configured issuer and audience.
fn base_validation(config: &AuthConfig) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.set_required_spec_claims(&["sub", "exp", "iss", "aud"]);
    validation
}

/// Decode and fully verify an access token (signature, algorithm,
/// issuer, audience, and lifetime).
pub fn decode_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.signing_key.as_bytes());
    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &base_validation(config))
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "access token failed validation");
            AuthError::InvalidToken
        })
}

/// Decode an access token for the refresh path: signature, algorithm,
/// issuer, and audience are enforced, but the lifetime check is
/// disabled so an expired-but-authentic token is accepted.
pub fn decode_expired_access_token(
    token: &str,
    config: &AuthConfig,
) -> Result<AccessTokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.signing_key.as_bytes());
    let mut validation = base_validation(config);
    validation.validate_exp = false;

    jsonwebtoken::decode::<AccessTokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "access token failed refresh-path validation");
            AuthError::InvalidToken
        })
}

/// Generate a cryptographically random opaque refresh token
/// (64 bytes → standard base64).
pub fn generate_refresh_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; REFRESH_TOKEN_BYTES] = rand::Rng::random(&mut rng);
    STANDARD.encode(bytes)
}
