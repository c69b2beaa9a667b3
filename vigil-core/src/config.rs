//! Explicit configuration structs for both services.
//!
//! Site name, remote address and warning policy are passed in per call site
//! instead of being read from ambient global state, so the policy functions
//! stay pure and testable.
use crate::error::ConfigError;
use crate::token::ForgotHash;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Tri-state policy controlling administrator login alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningMode {
    Off,
    AdminOnly,
    Everyone,
}

impl WarningMode {
    /// Map the historical numeric bitmask onto the enum: bit 0 warns on every
    /// login, bit 1 warns on administrator logins only.
    pub fn from_bits(value: u8) -> Self {
        if value & 1 != 0 {
            WarningMode::Everyone
        } else if value & 2 != 0 {
            WarningMode::AdminOnly
        } else {
            WarningMode::Off
        }
    }
}

impl Default for WarningMode {
    fn default() -> Self {
        WarningMode::Off
    }
}

/// Configuration for the login notification policy, read-only at request
/// time. `site_name` and `remote_address` are environment-derived by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginAlertConfig {
    pub site_name: String,
    pub remote_address: String,
    #[serde(default)]
    pub warning_mode: WarningMode,
    #[serde(default)]
    pub warning_email_addr: Option<String>,
}

fn default_lifetime_minutes() -> i64 {
    60
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

/// Configuration for the recovery email composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryConfig {
    pub sender_address: String,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub reply_to: Option<String>,
    /// How long a generated forgot hash stays valid.
    #[serde(default = "default_lifetime_minutes")]
    pub lifetime_minutes: i64,
    /// chrono format pattern for the `valid_until` template variable.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Render an HTML body in addition to the plain-text one.
    #[serde(default)]
    pub html_mail: bool,
}

impl RecoveryConfig {
    /// Reject incomplete configuration before any side effect happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sender_address.is_empty() {
            return Err(ConfigError::MissingField("sender_address".to_string()));
        }

        if self.date_format.is_empty() {
            return Err(ConfigError::MissingField("date_format".to_string()));
        }

        if self.lifetime_minutes <= 0 {
            return Err(ConfigError::InvalidField(
                "lifetime_minutes must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn sender(&self) -> String {
        if let Some(name) = &self.sender_name {
            format!("{} <{}>", name, self.sender_address)
        } else {
            self.sender_address.clone()
        }
    }

    pub fn lifetime(&self) -> Duration {
        Duration::minutes(self.lifetime_minutes)
    }

    /// Generate a fresh forgot hash expiring after the configured lifetime.
    pub fn forgot_hash(&self) -> ForgotHash {
        ForgotHash::generate(self.lifetime())
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            sender_address: "noreply@example.com".to_string(),
            sender_name: None,
            reply_to: None,
            lifetime_minutes: default_lifetime_minutes(),
            date_format: default_date_format(),
            html_mail: false,
        }
    }
}
