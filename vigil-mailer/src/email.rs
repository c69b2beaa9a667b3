use crate::MailerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A composed mail message, built once per request and handed to a transport.
///
/// Notification and recovery mail always addresses exactly one mailbox, so the
/// recipient is a single address. Addresses may carry a display name in the
/// `Name <user@example.com>` form understood by lettre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: Option<String>,
    pub text_body: Option<String>,
    pub headers: HashMap<String, String>,
}

impl Email {
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }

    pub fn validate(&self) -> Result<(), MailerError> {
        if self.to.is_empty() {
            return Err(MailerError::Builder("Recipient is required".to_string()));
        }

        if self.from.is_empty() {
            return Err(MailerError::Builder("From address is required".to_string()));
        }

        if self.subject.is_empty() {
            return Err(MailerError::Builder("Subject is required".to_string()));
        }

        if self.html_body.is_none() && self.text_body.is_none() {
            return Err(MailerError::Builder(
                "Either HTML or text body is required".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct EmailBuilder {
    to: Option<String>,
    from: Option<String>,
    reply_to: Option<String>,
    subject: Option<String>,
    html_body: Option<String>,
    text_body: Option<String>,
    headers: HashMap<String, String>,
}

impl EmailBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to<S: Into<String>>(mut self, email: S) -> Self {
        self.to = Some(email.into());
        self
    }

    /// Set the recipient with an explicit display name.
    pub fn to_named<S: Into<String>, N: Into<String>>(mut self, email: S, name: N) -> Self {
        self.to = Some(format!("{} <{}>", name.into(), email.into()));
        self
    }

    pub fn from<S: Into<String>>(mut self, email: S) -> Self {
        self.from = Some(email.into());
        self
    }

    pub fn reply_to<S: Into<String>>(mut self, email: S) -> Self {
        self.reply_to = Some(email.into());
        self
    }

    pub fn subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn html_body<S: Into<String>>(mut self, html: S) -> Self {
        self.html_body = Some(html.into());
        self
    }

    pub fn text_body<S: Into<String>>(mut self, text: S) -> Self {
        self.text_body = Some(text.into());
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Email, MailerError> {
        let email = Email {
            to: self
                .to
                .ok_or_else(|| MailerError::Builder("Recipient is required".to_string()))?,
            from: self
                .from
                .ok_or_else(|| MailerError::Builder("From address is required".to_string()))?,
            reply_to: self.reply_to,
            subject: self
                .subject
                .ok_or_else(|| MailerError::Builder("Subject is required".to_string()))?,
            html_body: self.html_body,
            text_body: self.text_body,
            headers: self.headers,
        };

        email.validate()?;
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_builder() {
        let email = Email::builder()
            .from("noreply@example.com")
            .to("karl@example.com")
            .subject("Test Subject")
            .text_body("Test content")
            .build()
            .unwrap();

        assert_eq!(email.from, "noreply@example.com");
        assert_eq!(email.to, "karl@example.com");
        assert_eq!(email.subject, "Test Subject");
        assert_eq!(email.text_body, Some("Test content".to_string()));
    }

    #[test]
    fn test_named_recipient() {
        let email = Email::builder()
            .from("noreply@example.com")
            .to_named("max@mustermann.de", "Max Mustermann")
            .subject("Test")
            .text_body("body")
            .build()
            .unwrap();

        assert_eq!(email.to, "Max Mustermann <max@mustermann.de>");
    }

    #[test]
    fn test_email_requires_body() {
        let result = Email::builder()
            .from("noreply@example.com")
            .to("karl@example.com")
            .subject("Test")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_email_requires_recipient() {
        let result = Email::builder()
            .from("noreply@example.com")
            .subject("Test")
            .text_body("body")
            .build();

        assert!(result.is_err());
    }
}
