use crate::{Email, MailerError};
use async_trait::async_trait;

/// Transport seam for outgoing mail.
///
/// Delivery is fire-and-forget from the caller's point of view: there is no
/// retry logic anywhere in this crate, a transport failure surfaces as an
/// error from `send_email` and nothing else.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_email(&self, email: Email) -> Result<(), MailerError>;
}
