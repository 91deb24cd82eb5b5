//! Mail sending with multiple delivery backends
//!
//! A [`Mailer`] resolves recipients, composes the body (literal or
//! view-based) and hands the message to the configured backend:
//! - sendmail (platform binary)
//! - SMTP relay (using lettre)
//! - debug (renders into the flash store, nothing transmitted)
//! - noop (accepts and drops)

pub mod backend;
pub mod debug;
pub mod dispatch;
pub mod flash;
pub mod headers;
pub mod noop;
pub mod sendmail;
pub mod smtp;

pub use backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
pub use debug::DebugBackend;
pub use dispatch::{BackendFactory, Mailer, MailerConfig};
pub use flash::FlashStore;
pub use noop::NoopBackend;
pub use sendmail::SendmailBackend;
pub use smtp::SmtpBackend;
