//! Debug delivery backend
//!
//! Nothing is transmitted. The message is rendered into a diagnostic
//! fragment and parked in the flash store under a random key; the host
//! application picks it up when rendering the next response. Useful in
//! development environments where outbound mail is unavailable or unwanted.

use super::backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
use super::flash::FlashStore;
use super::headers;
use crate::html;
use crate::template::TemplateEngine;
use async_trait::async_trait;
use uuid::Uuid;

/// Flash key prefix for stored fragments
pub const FLASH_KEY_PREFIX: &str = "debug.mail.";

const DEBUG_VIEW: &str = r#"<div class="mail-debug">
<h3>Mail debug</h3>
<p><strong>Sent at:</strong> {{sent_at}}</p>
<p><strong>To:</strong> {{to}}</p>
<p><strong>Subject:</strong> {{subject}}</p>
<pre class="mail-debug-headers">{{headers}}</pre>
<div class="mail-debug-body">{{body}}</div>
</div>"#;

/// Backend that renders into the flash store instead of sending
pub struct DebugBackend {
    store: FlashStore,
    mailer_ident: String,
}

impl DebugBackend {
    pub fn new(store: FlashStore, mailer_ident: impl Into<String>) -> Self {
        Self {
            store,
            mailer_ident: mailer_ident.into(),
        }
    }

    fn render(&self, mail: &OutboundMail) -> String {
        let header_block = headers::header_lines(&mail.message, &self.mailer_ident)
            .iter()
            .map(|line| html::escape(line))
            .collect::<Vec<_>>()
            .join("\n");

        let mut engine = TemplateEngine::new();
        engine
            .set("sent_at", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .set("to", html::escape(&mail.to))
            .set("subject", html::escape(&mail.message.subject))
            .set("headers", header_block)
            .set("body", mail.body.clone());

        engine.render(DEBUG_VIEW)
    }
}

#[async_trait]
impl MailBackend for DebugBackend {
    async fn send(&self, mail: &OutboundMail) -> Result<DeliveryReceipt, MailError> {
        let fragment = self.render(mail);

        // Random key: fragments from concurrent sends must not clobber
        // each other.
        let key = format!("{}{}", FLASH_KEY_PREFIX, Uuid::new_v4().simple());
        self.store.put(&key, fragment);

        tracing::debug!(key = %key, to = %mail.to, "mail parked in flash store");
        Ok(DeliveryReceipt::accepted(self.backend_name()).with_flash_key(key))
    }

    fn backend_name(&self) -> &'static str {
        "debug"
    }
}
