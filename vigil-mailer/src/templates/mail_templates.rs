use crate::{MailerError, templates::TemplateData};
use askama::Template;

/// Plain-text body of the password recovery mail.
#[derive(Template)]
#[template(
    source = r#"Hello {{ receiver_name }},

a password reset was requested for your account.

Follow this link to choose a new password:

{{ url }}

The link is valid until {{ valid_until }} and can be used only once.

If you did not request a password reset, you can safely ignore this email.
"#,
    ext = "txt"
)]
pub struct RecoveryTextTemplate {
    pub receiver_name: String,
    pub url: String,
    pub valid_until: String,
}

impl RecoveryTextTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            receiver_name: data.require_str("receiver_name")?,
            url: data.require_str("url")?,
            valid_until: data.require_str("valid_until")?,
        })
    }
}

/// HTML body of the password recovery mail, rendered in addition to the text
/// body when the recovery configuration enables HTML mail.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Password recovery</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 20px; background-color: #f4f4f4; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .button { display: inline-block; padding: 12px 24px; background-color: #007bff; color: white; text-decoration: none; border-radius: 4px; margin: 20px 0; }
        .footer { margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; font-size: 12px; color: #666; }
    </style>
</head>
<body>
    <div class="container">
        <h2>Password recovery</h2>

        <p>Hello {{ receiver_name }},</p>

        <p>a password reset was requested for your account. Click the button below to choose a new password.</p>

        <div style="text-align: center;">
            <a href="{{ url }}" class="button">Reset password</a>
        </div>

        <p>Or copy and paste this URL into your browser:</p>
        <p style="word-break: break-all; background: #f8f9fa; padding: 10px; border-radius: 4px; font-family: monospace;">{{ url }}</p>

        <p>The link is valid until {{ valid_until }} and can be used only once.</p>

        <div class="footer">
            <p>If you did not request a password reset, you can safely ignore this email.</p>
        </div>
    </div>
</body>
</html>
"#,
    ext = "html"
)]
pub struct RecoveryHtmlTemplate {
    pub receiver_name: String,
    pub url: String,
    pub valid_until: String,
}

impl RecoveryHtmlTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            receiver_name: data.require_str("receiver_name")?,
            url: data.require_str("url")?,
            valid_until: data.require_str("valid_until")?,
        })
    }
}

/// Body of the self-notification mail a user receives after logging in.
#[derive(Template)]
#[template(
    source = r#"There has been a login at "{{ site_name }}".

{% if let Some(name) = username %}User: {{ name }}
{% endif %}Remote address: {{ remote_address }}
Time: {{ logged_in_at }}

If this was not you, change your password immediately.
"#,
    ext = "txt"
)]
pub struct LoginNoticeTemplate {
    pub site_name: String,
    pub username: Option<String>,
    pub remote_address: String,
    pub logged_in_at: String,
}

impl LoginNoticeTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            site_name: data.require_str("site_name")?,
            username: data.optional_str("username"),
            remote_address: data.require_str("remote_address")?,
            logged_in_at: data.require_str("logged_in_at")?,
        })
    }
}

/// Body of the warning mail sent to the configured administrator address.
#[derive(Template)]
#[template(
    source = r#"A {% if admin %}backend administrator{% else %}backend user{% endif %} logged into "{{ site_name }}".

{% if let Some(name) = username %}User: {{ name }}
{% endif %}Remote address: {{ remote_address }}
Time: {{ logged_in_at }}
"#,
    ext = "txt"
)]
pub struct LoginWarningTemplate {
    pub site_name: String,
    pub username: Option<String>,
    pub remote_address: String,
    pub logged_in_at: String,
    pub admin: bool,
}

impl LoginWarningTemplate {
    pub fn from_data(data: &TemplateData) -> Result<Self, MailerError> {
        Ok(Self {
            site_name: data.require_str("site_name")?,
            username: data.optional_str("username"),
            remote_address: data.require_str("remote_address")?,
            logged_in_at: data.require_str("logged_in_at")?,
            admin: data
                .get("admin")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recovery_text_template() {
        let template = RecoveryTextTemplate {
            receiver_name: "Max Mustermann".to_string(),
            url: "https://example.com/recover?hash=abc".to_string(),
            valid_until: "2024-06-01 12:00".to_string(),
        };

        let rendered = template.render().unwrap();
        assert!(rendered.contains("Hello Max Mustermann"));
        assert!(rendered.contains("https://example.com/recover?hash=abc"));
        assert!(rendered.contains("valid until 2024-06-01 12:00"));
    }

    #[test]
    fn test_login_warning_template_admin_wording() {
        let template = LoginWarningTemplate {
            site_name: "My Site".to_string(),
            username: Some("karl".to_string()),
            remote_address: "127.0.0.1".to_string(),
            logged_in_at: "2024-06-01 12:00".to_string(),
            admin: true,
        };

        let rendered = template.render().unwrap();
        assert!(rendered.contains("backend administrator"));
        assert!(rendered.contains("User: karl"));
    }

    #[test]
    fn test_login_notice_template_without_username() {
        let template = LoginNoticeTemplate {
            site_name: "My Site".to_string(),
            username: None,
            remote_address: "10.0.0.5".to_string(),
            logged_in_at: "2024-06-01 12:00".to_string(),
        };

        let rendered = template.render().unwrap();
        assert!(!rendered.contains("User:"));
        assert!(rendered.contains("Remote address: 10.0.0.5"));
    }
}
