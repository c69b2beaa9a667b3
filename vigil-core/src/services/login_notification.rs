//! Login notification policy.
//!
//! On each backend login the policy decides zero, one or two notification
//! actions: a self-notification to the user and a warning to the configured
//! administrator address. The decision itself is a pure function over the
//! login context and the alert configuration; the service turns decided
//! actions into mail.
use crate::{
    Error,
    config::{LoginAlertConfig, WarningMode},
    user::LoginContext,
    validation::is_valid_email,
};
use chrono::Utc;
use std::sync::Arc;
use vigil_mailer::{LoginNoticeEmail, LoginWarningEmail, Mailer, TemplateEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    UserNotice,
    AdminWarning,
}

/// One decided notification: who gets mailed, with which subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationAction {
    pub kind: NotificationKind,
    pub recipient: String,
    pub subject: String,
}

/// Decide which notifications a login triggers.
///
/// The two rules are evaluated independently and may both fire. Every
/// suppression branch (flag unset, invalid email, warning mode off, no
/// warning address configured) is silent; suppression is expected behavior,
/// not an error.
pub fn evaluate(context: &LoginContext, config: &LoginAlertConfig) -> Vec<NotificationAction> {
    let mut actions = Vec::new();

    if context.user.email_me_at_login {
        if let Some(email) = context.user.email.as_deref() {
            if is_valid_email(email) {
                actions.push(NotificationAction {
                    kind: NotificationKind::UserNotice,
                    recipient: email.to_string(),
                    subject: format!(
                        "Login at \"{}\" from {}",
                        config.site_name, config.remote_address
                    ),
                });
            }
        }
    }

    let warn = match config.warning_mode {
        WarningMode::Off => false,
        WarningMode::AdminOnly => context.is_admin,
        WarningMode::Everyone => true,
    };

    if warn {
        if let Some(recipient) = config
            .warning_email_addr
            .as_deref()
            .filter(|addr| !addr.is_empty())
        {
            let prefix = if context.is_admin {
                "[AdminLoginWarning]"
            } else {
                "[LoginWarning]"
            };

            actions.push(NotificationAction {
                kind: NotificationKind::AdminWarning,
                recipient: recipient.to_string(),
                subject: format!(
                    "{} At \"{}\" from {}",
                    prefix, config.site_name, config.remote_address
                ),
            });
        }
    }

    actions
}

/// Turns decided notification actions into mail.
pub struct LoginNotificationService {
    mailer: Arc<dyn Mailer>,
    engine: Arc<dyn TemplateEngine>,
    from: String,
}

impl LoginNotificationService {
    pub fn new(mailer: Arc<dyn Mailer>, engine: Arc<dyn TemplateEngine>, from: String) -> Self {
        Self {
            mailer,
            engine,
            from,
        }
    }

    /// Evaluate the policy for one login and send every decided
    /// notification. Transport errors propagate; there are no retries.
    pub async fn notify(
        &self,
        context: &LoginContext,
        config: &LoginAlertConfig,
    ) -> Result<(), Error> {
        let actions = evaluate(context, config);

        if actions.is_empty() {
            tracing::debug!(site_name = %config.site_name, "login triggered no notifications");
            return Ok(());
        }

        let logged_in_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let username = context.user.username.as_deref();

        for action in actions {
            let email = match action.kind {
                NotificationKind::UserNotice => {
                    LoginNoticeEmail {
                        from: &self.from,
                        to: &action.recipient,
                        subject: &action.subject,
                        site_name: &config.site_name,
                        username,
                        remote_address: &config.remote_address,
                        logged_in_at: &logged_in_at,
                    }
                    .build(self.engine.as_ref())
                    .await?
                }
                NotificationKind::AdminWarning => {
                    LoginWarningEmail {
                        from: &self.from,
                        to: &action.recipient,
                        subject: &action.subject,
                        site_name: &config.site_name,
                        username,
                        remote_address: &config.remote_address,
                        logged_in_at: &logged_in_at,
                        admin: context.is_admin,
                    }
                    .build(self.engine.as_ref())
                    .await?
                }
            };

            self.mailer.send_email(email).await?;
            tracing::info!(
                recipient = %action.recipient,
                kind = ?action.kind,
                "login notification sent"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::LoginUser;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use vigil_mailer::{AskamaTemplateEngine, Email, MailerError};

    fn alert_config(mode: WarningMode) -> LoginAlertConfig {
        LoginAlertConfig {
            site_name: "My TYPO3 Inc.".to_string(),
            remote_address: "127.0.0.1".to_string(),
            warning_mode: mode,
            warning_email_addr: Some("admin@acme.com".to_string()),
        }
    }

    fn login_context(opt_in: bool, email: Option<&str>, is_admin: bool) -> LoginContext {
        LoginContext {
            user: LoginUser {
                username: Some("karl".to_string()),
                email: email.map(|e| e.to_string()),
                email_me_at_login: opt_in,
            },
            is_admin,
        }
    }

    #[test]
    fn test_self_notification_requires_opt_in_and_valid_email() {
        let config = alert_config(WarningMode::Off);

        let actions = evaluate(&login_context(true, Some("test@acme.com"), false), &config);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, NotificationKind::UserNotice);
        assert_eq!(actions[0].recipient, "test@acme.com");

        assert!(evaluate(&login_context(false, Some("test@acme.com"), false), &config).is_empty());
        assert!(evaluate(&login_context(true, None, false), &config).is_empty());
    }

    #[test]
    fn test_self_notification_rejects_bare_domain() {
        let config = alert_config(WarningMode::Off);
        let actions = evaluate(&login_context(true, Some("dot.com"), false), &config);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_warning_mode_off_never_warns() {
        let config = alert_config(WarningMode::Off);
        assert!(evaluate(&login_context(false, None, true), &config).is_empty());
        assert!(evaluate(&login_context(false, None, false), &config).is_empty());
    }

    #[test]
    fn test_warning_mode_admin_only() {
        let config = alert_config(WarningMode::AdminOnly);

        let actions = evaluate(&login_context(false, None, true), &config);
        assert_eq!(actions.len(), 1);
        assert_eq!(
            actions[0].subject,
            "[AdminLoginWarning] At \"My TYPO3 Inc.\" from 127.0.0.1"
        );

        assert!(evaluate(&login_context(false, None, false), &config).is_empty());
    }

    #[test]
    fn test_warning_mode_everyone() {
        let config = alert_config(WarningMode::Everyone);

        let admin_actions = evaluate(&login_context(false, None, true), &config);
        assert_eq!(admin_actions.len(), 1);
        assert_eq!(
            admin_actions[0].subject,
            "[AdminLoginWarning] At \"My TYPO3 Inc.\" from 127.0.0.1"
        );

        let user_actions = evaluate(&login_context(false, None, false), &config);
        assert_eq!(user_actions.len(), 1);
        assert_eq!(
            user_actions[0].subject,
            "[LoginWarning] At \"My TYPO3 Inc.\" from 127.0.0.1"
        );
        assert_eq!(user_actions[0].recipient, "admin@acme.com");
    }

    #[test]
    fn test_warning_requires_configured_address() {
        let mut config = alert_config(WarningMode::Everyone);
        config.warning_email_addr = None;
        assert!(evaluate(&login_context(false, None, true), &config).is_empty());

        config.warning_email_addr = Some(String::new());
        assert!(evaluate(&login_context(false, None, true), &config).is_empty());
    }

    #[test]
    fn test_both_rules_fire_independently() {
        let config = alert_config(WarningMode::Everyone);
        let actions = evaluate(&login_context(true, Some("test@acme.com"), true), &config);

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].kind, NotificationKind::UserNotice);
        assert_eq!(actions[1].kind, NotificationKind::AdminWarning);
    }

    struct MockMailer {
        sent: Mutex<Vec<Email>>,
    }

    impl MockMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Mailer for MockMailer {
        async fn send_email(&self, email: Email) -> Result<(), MailerError> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    fn service(mailer: Arc<MockMailer>) -> LoginNotificationService {
        LoginNotificationService::new(
            mailer,
            Arc::new(AskamaTemplateEngine::new()),
            "noreply@acme.com".to_string(),
        )
    }

    #[tokio::test]
    async fn test_notify_sends_decided_mail() {
        let mailer = Arc::new(MockMailer::new());
        let config = alert_config(WarningMode::Everyone);

        service(mailer.clone())
            .notify(&login_context(true, Some("test@acme.com"), false), &config)
            .await
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "test@acme.com");
        assert_eq!(sent[1].to, "admin@acme.com");
        assert_eq!(
            sent[1].subject,
            "[LoginWarning] At \"My TYPO3 Inc.\" from 127.0.0.1"
        );
        assert!(sent[1].text_body.as_deref().unwrap().contains("127.0.0.1"));
    }

    #[tokio::test]
    async fn test_notify_suppression_sends_nothing() {
        let mailer = Arc::new(MockMailer::new());
        let config = alert_config(WarningMode::AdminOnly);

        service(mailer.clone())
            .notify(&login_context(false, Some("dot.com"), false), &config)
            .await
            .unwrap();

        assert!(mailer.sent.lock().unwrap().is_empty());
    }
}
