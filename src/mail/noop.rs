//! No-op delivery backend

use super::backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
use async_trait::async_trait;

/// Backend that accepts and drops every message.
///
/// Used for disabling mail in non-production environments without touching
/// the calling code.
#[derive(Debug, Default)]
pub struct NoopBackend;

impl NoopBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailBackend for NoopBackend {
    async fn send(&self, mail: &OutboundMail) -> Result<DeliveryReceipt, MailError> {
        tracing::debug!(to = %mail.to, subject = %mail.message.subject, "mail dropped by noop backend");
        Ok(DeliveryReceipt::accepted(self.backend_name()))
    }

    fn backend_name(&self) -> &'static str {
        "noop"
    }
}
