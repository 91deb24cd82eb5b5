//! sitekit - web portal integration components
//!
//! This crate provides the integration glue a portal application needs
//! around external services: mail dispatch over selectable delivery
//! backends, the Dokobit identity-gateway login widget, Foundation asset
//! publishing and registration, and VauID SSO URL helpers.

pub mod assets;
pub mod config;
pub mod dokobit;
pub mod domain;
pub mod error;
pub mod html;
pub mod mail;
pub mod template;
pub mod vau;

// Re-export commonly used types
pub use config::Config;
pub use dokobit::DokobitLoginWidget;
pub use error::{Error, Result};
pub use mail::{Mailer, MailerConfig};
pub use vau::VauUrls;
