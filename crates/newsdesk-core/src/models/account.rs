//! System account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role code reserved for the synthetic administrator identity.
///
/// The administrator is built from configuration at login time and has
/// no row in the account store; a persisted account must never carry
/// this role.
pub const ADMIN_ROLE: i64 = 999;

/// An account row in the external account store.
///
/// Rows are created and destroyed by the surrounding system; the auth
/// core only ever mutates the two refresh-token fields, once per
/// successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// Unique, compared case-sensitively.
    pub email: String,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
    /// Role code (e.g. staff, lecturer); see [`ADMIN_ROLE`].
    pub role: i64,
    /// Currently live opaque refresh token, if any. At most one per
    /// account — storing a new one invalidates the old.
    pub refresh_token: Option<String>,
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Whether `candidate` matches the live refresh token and that
    /// token has not yet expired at `now`.
    pub fn refresh_token_is_valid(&self, candidate: &str, now: DateTime<Utc>) -> bool {
        match (&self.refresh_token, self.refresh_token_expires_at) {
            (Some(stored), Some(expires_at)) => stored == candidate && expires_at > now,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn account(token: Option<&str>, expires_at: Option<DateTime<Utc>>) -> Account {
        Account {
            id: 1,
            email: "a@x.com".into(),
            password_hash: String::new(),
            role: 1,
            refresh_token: token.map(Into::into),
            refresh_token_expires_at: expires_at,
        }
    }

    #[test]
    fn live_token_matches() {
        let acc = account(Some("tok"), Some(Utc::now() + Duration::days(1)));
        assert!(acc.refresh_token_is_valid("tok", Utc::now()));
    }

    #[test]
    fn mismatched_token_rejected() {
        let acc = account(Some("tok"), Some(Utc::now() + Duration::days(1)));
        assert!(!acc.refresh_token_is_valid("other", Utc::now()));
    }

    #[test]
    fn expired_token_rejected() {
        let acc = account(Some("tok"), Some(Utc::now() - Duration::seconds(1)));
        assert!(!acc.refresh_token_is_valid("tok", Utc::now()));
    }

    #[test]
    fn missing_token_rejected() {
        let acc = account(None, None);
        assert!(!acc.refresh_token_is_valid("tok", Utc::now()));
    }
}
