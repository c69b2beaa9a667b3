//! Core functionality for the vigil notification toolkit.
//!
//! This crate carries the domain types and the two services: the login
//! notification policy (who gets mailed when a backend login happens) and
//! the recovery email composer (forgot-hash generation, mail assembly and
//! the pre-send hook chain). Everything mail-shaped comes from
//! `vigil-mailer`; storage, routing and localization are trait seams the
//! host application implements.
pub mod config;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod token;
pub mod user;
pub mod validation;

pub use config::{LoginAlertConfig, RecoveryConfig, WarningMode};
pub use error::{ConfigError, Error, EventError, StorageError, ValidationError};
pub use events::{Hook, HookChain, PasswordChange, SendRecoveryEmail, StoppableEvent};
pub use repositories::UserRepository;
pub use services::{
    Localizer, LoginNotificationService, NotificationAction, NotificationKind, RecoveryService,
    UrlBuilder,
};
pub use token::ForgotHash;
pub use user::{LoginContext, LoginUser, UserInformation};
