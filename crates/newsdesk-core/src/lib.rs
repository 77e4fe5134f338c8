//! Newsdesk Core — shared domain model, error taxonomy, and the
//! account-store repository trait.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{NewsdeskError, NewsdeskResult};
pub use models::account::Account;
pub use repository::AccountRepository;
