//! Domain types shared across sitekit components

pub mod delivery;
pub mod dokobit;
pub mod message;

pub use delivery::{DeliveryConfig, SendmailConfig, SmtpConfig};
pub use dokobit::{DokobitLoginOptions, DEFAULT_CONTAINER_ID, DEFAULT_JS_URL};
pub use message::{ContentType, MailMessage, Recipients};
