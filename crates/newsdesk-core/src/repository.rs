//! Repository trait for data access abstraction.
//!
//! The account store is owned by the surrounding system; this trait is
//! the seam the auth core consumes. All operations are async.

use chrono::{DateTime, Utc};

use crate::error::NewsdeskResult;
use crate::models::account::Account;

pub trait AccountRepository: Send + Sync {
    /// Look up an account by its (case-sensitive) email address.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = NewsdeskResult<Option<Account>>> + Send;

    /// Persist a newly issued refresh token and its expiry on the
    /// account row, replacing whatever was stored before. Last write
    /// wins under concurrent logins.
    fn store_refresh_token(
        &self,
        account_id: i64,
        refresh_token: &str,
        expires_at: DateTime<Utc>,
    ) -> impl Future<Output = NewsdeskResult<()>> + Send;
}
