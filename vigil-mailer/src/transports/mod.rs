mod file;
mod sendmail;
pub mod smtp;

pub use file::FileTransport;
pub use sendmail::SendmailTransport;
pub use smtp::{SmtpTransport, TlsConfig};

use crate::{Email, MailerError};
use lettre::Message;

/// Convert a composed [`Email`] into a lettre message.
///
/// Shared by all transports. Builds a multipart/alternative message when both
/// a text and an HTML body are present, otherwise a single-part message.
pub(crate) fn build_message(email: Email) -> Result<Message, MailerError> {
    let mut message_builder = Message::builder()
        .from(email.from.parse()?)
        .to(email.to.parse()?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        message_builder = message_builder.reply_to(reply_to.parse()?);
    }

    let message = if let Some(html) = email.html_body {
        if let Some(text) = email.text_body {
            message_builder.multipart(
                lettre::message::MultiPart::alternative()
                    .singlepart(lettre::message::SinglePart::plain(text))
                    .singlepart(lettre::message::SinglePart::html(html)),
            )?
        } else {
            message_builder.body(html)?
        }
    } else if let Some(text) = email.text_body {
        message_builder.body(text)?
    } else {
        return Err(MailerError::Builder("No email body provided".to_string()));
    };

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_email() -> Email {
        Email {
            to: "karl@example.com".to_string(),
            from: "noreply@example.com".to_string(),
            reply_to: None,
            subject: "Test Subject".to_string(),
            html_body: Some("<h1>Hello</h1>".to_string()),
            text_body: Some("Hello".to_string()),
            headers: HashMap::new(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = build_message(test_email());
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_with_named_recipient() {
        let mut email = test_email();
        email.to = "Max Mustermann <max@mustermann.de>".to_string();
        email.reply_to = Some("service@example.com".to_string());

        let message = build_message(email);
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_without_body_fails() {
        let mut email = test_email();
        email.html_body = None;
        email.text_body = None;

        let message = build_message(email);
        assert!(message.is_err());
    }
}
