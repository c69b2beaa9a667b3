//! Email composition, templates and transports for the vigil notification
//! toolkit.
//!
//! This crate owns everything mail-shaped: the [`Email`] value type and its
//! builder, the [`Mailer`] transport seam with lettre-backed SMTP, file and
//! sendmail implementations, and the askama template engine with the built-in
//! recovery and login mail bodies. The decision logic that produces these
//! mails lives in `vigil-core`.
pub mod config;
pub mod email;
pub mod email_types;
pub mod error;
pub mod mailer;
pub mod templates;
pub mod transports;

pub use config::{MailerConfig, TransportConfig};
pub use email::{Email, EmailBuilder};
pub use email_types::{LoginNoticeEmail, LoginWarningEmail, RecoveryEmail};
pub use error::MailerError;
pub use mailer::Mailer;
pub use templates::{AskamaTemplateEngine, TemplateData, TemplateEngine};
pub use transports::{FileTransport, SendmailTransport, SmtpTransport};

pub mod prelude {
    pub use crate::{
        AskamaTemplateEngine, Email, EmailBuilder, FileTransport, LoginNoticeEmail,
        LoginWarningEmail, Mailer, MailerConfig, MailerError, RecoveryEmail, SendmailTransport,
        SmtpTransport, TemplateData, TemplateEngine,
    };
}
