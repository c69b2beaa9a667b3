use crate::{
    Email, MailerError,
    templates::{TemplateData, TemplateEngine},
};

/// Assembles the password recovery mail.
///
/// The subject is computed by the caller (it comes from a localization
/// lookup), this type only renders the bodies and puts the message together.
/// The HTML body is rendered in addition to the text body when `html` is set.
pub struct RecoveryEmail<'a> {
    pub from: &'a str,
    pub reply_to: Option<&'a str>,
    pub to: &'a str,
    pub receiver_name: &'a str,
    pub subject: &'a str,
    pub url: &'a str,
    pub valid_until: &'a str,
    pub html: bool,
}

impl RecoveryEmail<'_> {
    pub async fn build(&self, engine: &dyn TemplateEngine) -> Result<Email, MailerError> {
        let template_data = TemplateData::new()
            .insert("receiver_name", self.receiver_name)?
            .insert("url", self.url)?
            .insert("valid_until", self.valid_until)?;

        let text_body = engine.render_text("recovery", template_data.clone()).await?;

        let mut builder = Email::builder()
            .from(self.from)
            .to_named(self.to, self.receiver_name)
            .subject(self.subject)
            .text_body(text_body);

        if self.html {
            let html_body = engine.render_html("recovery", template_data).await?;
            builder = builder.html_body(html_body);
        }

        if let Some(reply_to) = self.reply_to {
            builder = builder.reply_to(reply_to);
        }

        builder.build()
    }
}

/// Assembles the self-notification mail a user receives after logging in.
pub struct LoginNoticeEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub site_name: &'a str,
    pub username: Option<&'a str>,
    pub remote_address: &'a str,
    pub logged_in_at: &'a str,
}

impl LoginNoticeEmail<'_> {
    pub async fn build(&self, engine: &dyn TemplateEngine) -> Result<Email, MailerError> {
        let template_data = TemplateData::new()
            .insert("site_name", self.site_name)?
            .insert("username", self.username.unwrap_or_default())?
            .insert("remote_address", self.remote_address)?
            .insert("logged_in_at", self.logged_in_at)?;

        let text_body = engine.render_text("login_notice", template_data).await?;

        Email::builder()
            .from(self.from)
            .to(self.to)
            .subject(self.subject)
            .text_body(text_body)
            .build()
    }
}

/// Assembles the warning mail sent to the configured administrator address.
pub struct LoginWarningEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub site_name: &'a str,
    pub username: Option<&'a str>,
    pub remote_address: &'a str,
    pub logged_in_at: &'a str,
    pub admin: bool,
}

impl LoginWarningEmail<'_> {
    pub async fn build(&self, engine: &dyn TemplateEngine) -> Result<Email, MailerError> {
        let template_data = TemplateData::new()
            .insert("site_name", self.site_name)?
            .insert("username", self.username.unwrap_or_default())?
            .insert("remote_address", self.remote_address)?
            .insert("logged_in_at", self.logged_in_at)?
            .insert("admin", self.admin)?;

        let text_body = engine.render_text("login_warning", template_data).await?;

        Email::builder()
            .from(self.from)
            .to(self.to)
            .subject(self.subject)
            .text_body(text_body)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::AskamaTemplateEngine;

    #[tokio::test]
    async fn test_recovery_email_text_only() {
        let engine = AskamaTemplateEngine::new();
        let email = RecoveryEmail {
            from: "noreply@example.com",
            reply_to: None,
            to: "max@mustermann.de",
            receiver_name: "m.mustermann",
            subject: "Password recovery",
            url: "https://example.com/recover?hash=abc",
            valid_until: "2024-06-01 12:00",
            html: false,
        }
        .build(&engine)
        .await
        .unwrap();

        assert_eq!(email.to, "m.mustermann <max@mustermann.de>");
        assert_eq!(email.subject, "Password recovery");
        assert!(email.text_body.is_some());
        assert!(email.html_body.is_none());
    }

    #[tokio::test]
    async fn test_recovery_email_with_html_and_reply_to() {
        let engine = AskamaTemplateEngine::new();
        let email = RecoveryEmail {
            from: "noreply@example.com",
            reply_to: Some("service@example.com"),
            to: "max@mustermann.de",
            receiver_name: "Max Mustermann",
            subject: "Password recovery",
            url: "https://example.com/recover?hash=abc",
            valid_until: "2024-06-01 12:00",
            html: true,
        }
        .build(&engine)
        .await
        .unwrap();

        assert!(email.html_body.is_some());
        assert_eq!(email.reply_to, Some("service@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_login_warning_email() {
        let engine = AskamaTemplateEngine::new();
        let email = LoginWarningEmail {
            from: "noreply@example.com",
            to: "admin@example.com",
            subject: "[LoginWarning] At \"My Site\" from 127.0.0.1",
            site_name: "My Site",
            username: Some("karl"),
            remote_address: "127.0.0.1",
            logged_in_at: "2024-06-01 12:00",
            admin: false,
        }
        .build(&engine)
        .await
        .unwrap();

        assert_eq!(email.to, "admin@example.com");
        assert!(email.subject.starts_with("[LoginWarning]"));
        assert!(email.text_body.unwrap().contains("backend user"));
    }
}
