//! Authentication service — login and refresh orchestration.

use chrono::{Duration, Utc};
use newsdesk_core::models::account::{ADMIN_ROLE, Account};
use newsdesk_core::repository::AccountRepository;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// A verified identity.
///
/// Only the stored variant has a row behind it, so only it can carry a
/// persisted refresh token. The administrator is synthesized from
/// configuration at login time: its refresh token is returned to the
/// caller but never written anywhere, which means an administrator
/// refresh always fails. Known inconsistency, kept for compatibility
/// with the rest of the system.
#[derive(Debug, Clone)]
pub enum Principal {
    Stored(Account),
    Admin { email: String },
}

impl Principal {
    pub fn id(&self) -> i64 {
        match self {
            Principal::Stored(account) => account.id,
            Principal::Admin { .. } => 0,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Stored(account) => &account.email,
            Principal::Admin { email } => email,
        }
    }

    pub fn role(&self) -> i64 {
        match self {
            Principal::Stored(account) => account.role,
            Principal::Admin { .. } => ADMIN_ROLE,
        }
    }
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed HS256 JWT access token.
    pub access_token: String,
    /// Raw opaque refresh token (returned to the client and stored on
    /// the account row).
    pub refresh_token: String,
}

/// Successful refresh result.
///
/// Refresh does not rotate the refresh token — the stored one stays
/// valid until its own expiry; only a fresh access token is minted.
#[derive(Debug)]
pub struct RefreshOutput {
    /// New signed HS256 JWT access token.
    pub access_token: String,
}

/// Authentication service.
///
/// Generic over the account repository so the auth layer carries no
/// dependency on any particular store.
#[derive(Debug)]
pub struct AuthService<R: AccountRepository> {
    repo: R,
    config: AuthConfig,
}

impl<R: AccountRepository> AuthService<R> {
    /// Build the service. Fails if the signing key is missing — the
    /// service refuses to start without one.
    pub fn new(repo: R, config: AuthConfig) -> Result<Self, AuthError> {
        if config.signing_key.is_empty() {
            return Err(AuthError::Config("signing key is not configured".into()));
        }
        Ok(Self { repo, config })
    }

    /// Authenticate an email/password pair and issue a token pair.
    ///
    /// The new refresh token overwrites whatever the account row held
    /// before, immediately invalidating it. Concurrent logins race on
    /// last-write-wins; only the most recently stored token remains
    /// valid.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutput, AuthError> {
        let principal = self.verify_credentials(email, password).await?;

        let access_token = token::issue_access_token(
            principal.id(),
            principal.email(),
            principal.role(),
            &self.config,
        )?;

        let refresh_token = token::generate_refresh_token();
        let expires_at =
            Utc::now() + Duration::seconds(self.config.refresh_token_ttl_secs as i64);

        match &principal {
            Principal::Stored(account) => {
                self.repo
                    .store_refresh_token(account.id, &refresh_token, expires_at)
                    .await
                    .map_err(|e| AuthError::Store(e.to_string()))?;
            }
            Principal::Admin { .. } => {
                // No backing row to update.
                tracing::debug!("administrator login: refresh token not persisted");
            }
        }

        Ok(LoginOutput {
            access_token,
            refresh_token,
        })
    }

    /// Exchange an expired-but-authentic access token plus the live
    /// refresh token for a fresh access token.
    ///
    /// Single pass with early exit; every rejection surfaces as
    /// [`AuthError::InvalidToken`] so callers cannot tell the
    /// sub-causes apart.
    pub async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<RefreshOutput, AuthError> {
        // 1. Signature, algorithm, issuer, and audience — lifetime
        //    validation disabled for this call only.
        let claims = token::decode_expired_access_token(access_token, &self.config)?;

        // 2-3. Resolve the account by the token's email claim.
        let account = self
            .repo
            .find_by_email(&claims.email)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!(email = %claims.email, "refresh rejected: no such account");
                AuthError::InvalidToken
            })?;

        // 4. The stored refresh token is the single source of truth.
        if !account.refresh_token_is_valid(refresh_token, Utc::now()) {
            tracing::debug!(
                account_id = account.id,
                "refresh rejected: refresh token mismatch or expired"
            );
            return Err(AuthError::InvalidToken);
        }

        // 5. Mint a fresh access token only; the stored refresh token
        //    is left unchanged.
        let access_token =
            token::issue_access_token(account.id, &account.email, account.role, &self.config)?;

        Ok(RefreshOutput { access_token })
    }

    /// Check credentials against the configured administrator override
    /// first, then the account store. Unknown email and wrong password
    /// are indistinguishable to the caller.
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        if !self.config.admin_email.is_empty()
            && email == self.config.admin_email
            && password::verify_password(password, &self.config.admin_password_hash)?
        {
            return Ok(Principal::Admin {
                email: email.to_owned(),
            });
        }

        let account = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))?
            .ok_or(AuthError::AuthenticationFailed)?;

        if !password::verify_password(password, &account.password_hash)? {
            return Err(AuthError::AuthenticationFailed);
        }

        Ok(Principal::Stored(account))
    }
}
