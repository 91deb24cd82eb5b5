//! Mail backend trait and error types

use crate::domain::MailMessage;
use async_trait::async_trait;
use thiserror::Error;

/// Mail error types
#[derive(Error, Debug)]
pub enum MailError {
    #[error("No recipients resolved from the 'to' field")]
    EmptyRecipients,

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Template error: {0}")]
    Template(#[from] crate::template::TemplateError),
}

/// A message with recipients resolved and the body composed, ready for a
/// transport
#[derive(Debug, Clone)]
pub struct OutboundMail {
    /// Header-compatible recipient string (list already comma-joined)
    pub to: String,
    /// Final body content
    pub body: String,
    /// The originating message, for header and subject fields
    pub message: MailMessage,
}

/// Outcome of an accepted send
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Name of the backend that accepted the message
    pub backend: &'static str,
    /// Transport-assigned message id, when the transport reports one
    pub message_id: Option<String>,
    /// Flash-store key holding the diagnostic fragment (debug backend only)
    pub flash_key: Option<String>,
}

impl DeliveryReceipt {
    pub fn accepted(backend: &'static str) -> Self {
        Self {
            backend,
            message_id: None,
            flash_key: None,
        }
    }

    pub fn with_message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn with_flash_key(mut self, flash_key: impl Into<String>) -> Self {
        self.flash_key = Some(flash_key.into());
        self
    }
}

/// Trait for mail delivery backends
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailBackend: Send + Sync {
    /// Hand the mail to the transport
    async fn send(&self, mail: &OutboundMail) -> Result<DeliveryReceipt, MailError>;

    /// Get the backend name
    fn backend_name(&self) -> &'static str;
}
