//! Repository traits for the data access seam.
//!
//! Only the traits live here; concrete implementations belong to the host
//! application (typically backed by its user database).
use crate::{Error, token::ForgotHash, user::UserInformation};
use async_trait::async_trait;

/// Data access for user records, keyed by email address.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a fresh forgot hash against the user with the given email
    /// address. A missing user is not an error at this layer; the
    /// implementation swallows it so callers cannot probe which addresses
    /// exist.
    async fn update_forgot_hash(&self, email: &str, hash: &ForgotHash) -> Result<(), Error>;

    /// Fetch display data for the user with the given email address.
    async fn fetch_user_information(
        &self,
        email: &str,
    ) -> Result<Option<UserInformation>, Error>;
}
