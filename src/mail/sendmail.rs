//! Delivery through the platform sendmail binary
//!
//! The message is assembled as raw header lines plus a word-wrapped body and
//! piped to the sendmail command. Recipient extraction is left to the binary
//! (`-t`); the configured extra arguments carry envelope-sender control such
//! as `-fbounces@example.com`.

use super::backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
use super::headers;
use crate::domain::SendmailConfig;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Sendmail-based delivery backend
pub struct SendmailBackend {
    config: SendmailConfig,
}

impl SendmailBackend {
    pub fn new(config: SendmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the raw message handed to the binary
    fn raw_message(&self, mail: &OutboundMail) -> String {
        let mut lines = Vec::new();
        lines.push(format!("To: {}", mail.to));
        lines.push(format!("Subject: {}", mail.message.subject));
        lines.extend(headers::header_lines(&mail.message, &self.config.mailer_ident));

        let wrapped = headers::wrap_body(&mail.body, self.config.line_length);
        format!("{}\r\n\r\n{}", lines.join("\r\n"), wrapped)
    }
}

#[async_trait]
impl MailBackend for SendmailBackend {
    async fn send(&self, mail: &OutboundMail) -> Result<DeliveryReceipt, MailError> {
        let raw = self.raw_message(mail);

        let mut child = Command::new(&self.config.command)
            .arg("-t")
            .arg("-i")
            .args(&self.config.extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                MailError::TransportFailure(format!(
                    "failed to spawn {}: {}",
                    self.config.command, e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The exit status is the verdict; a closed pipe surfaces there.
            let _ = stdin.write_all(raw.as_bytes()).await;
            let _ = stdin.shutdown().await;
        }

        let status = child.wait().await.map_err(|e| {
            MailError::TransportFailure(format!("failed to wait on {}: {}", self.config.command, e))
        })?;

        if status.success() {
            Ok(DeliveryReceipt::accepted(self.backend_name()))
        } else {
            tracing::error!("sendmail exited with {}", status);
            Err(MailError::TransportFailure(format!(
                "{} exited with {}",
                self.config.command, status
            )))
        }
    }

    fn backend_name(&self) -> &'static str {
        "sendmail"
    }
}
