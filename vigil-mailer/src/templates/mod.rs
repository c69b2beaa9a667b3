mod engine;
mod mail_templates;

pub use engine::{AskamaTemplateEngine, TemplateEngine};
pub use mail_templates::{
    LoginNoticeTemplate, LoginWarningTemplate, RecoveryHtmlTemplate, RecoveryTextTemplate,
};

use crate::MailerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bag of variables handed to a template engine.
///
/// Keeps the engine seam independent of the concrete template structs, so a
/// host application can swap in its own engine implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateData {
    pub data: HashMap<String, serde_json::Value>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn insert<T: Serialize>(mut self, key: &str, value: T) -> Result<Self, MailerError> {
        self.data
            .insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub(crate) fn require_str(&self, key: &str) -> Result<String, MailerError> {
        self.get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| MailerError::Builder(format!("{key} is required")))
    }

    pub(crate) fn optional_str(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}
