//! Service layer for the notification business logic.
//!
//! Both services are simple orchestration: gather configuration, branch on a
//! few flags, format strings, hand off to the mail transport. They do not
//! interact with each other.

pub mod login_notification;
pub mod recovery;

pub use login_notification::{
    LoginNotificationService, NotificationAction, NotificationKind, evaluate,
};
pub use recovery::{Localizer, RECOVERY_MAIL_SUBJECT_KEY, RecoveryService, UrlBuilder};
