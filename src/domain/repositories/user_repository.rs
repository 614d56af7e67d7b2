//! User Repository Trait
//!
//! Storage seam for registered accounts. Implementations own their data and
//! must keep emails unique.

use crate::domain::entities::user::User;
use crate::domain::errors::CredentialError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account and assign its id.
    ///
    /// Returns `CredentialError::DuplicateEmail` if the email is already taken.
    async fn insert(&self, email: &str, password_hash: String) -> Result<User, CredentialError>;

    async fn find_by_email(&self, email: &str) -> Option<User>;
}
