//! User-facing data consumed by the notification services.
//!
//! Both records are transient: they are constructed (or fetched) per request
//! and never persisted by this crate.
use serde::{Deserialize, Serialize};

/// Display data for a user, fetched by email address when composing the
/// recovery mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInformation {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

impl UserInformation {
    /// Display name for the mail envelope.
    ///
    /// Concatenates first, middle and last name, skipping empty middle and
    /// last names, and falls back to the username when all name fields are
    /// empty.
    pub fn display_name(&self) -> String {
        let display_name = format!(
            "{}{}{}",
            self.first_name,
            if self.middle_name.is_empty() {
                String::new()
            } else {
                format!(" {}", self.middle_name)
            },
            if self.last_name.is_empty() {
                String::new()
            } else {
                format!(" {}", self.last_name)
            },
        )
        .trim()
        .to_string();

        if display_name.is_empty() {
            self.username.clone()
        } else {
            display_name
        }
    }
}

/// The user record attached to a login attempt.
///
/// All fields are optional because authentication backends differ in what
/// they hand over; the policy treats anything missing as a reason to stay
/// silent rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Per-user preference flag for the self-notification mail.
    pub email_me_at_login: bool,
}

/// Everything the login notification policy needs to know about one login
/// attempt. Constructed per attempt, not persisted.
#[derive(Debug, Clone, Default)]
pub struct LoginContext {
    pub user: LoginUser,
    pub is_admin: bool,
}
