//! Mail dispatch over a configured delivery backend

use super::backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
use super::debug::DebugBackend;
use super::flash::FlashStore;
use super::noop::NoopBackend;
use super::sendmail::SendmailBackend;
use super::smtp::SmtpBackend;
use crate::domain::delivery::default_mailer_ident;
use crate::domain::{DeliveryConfig, MailMessage};
use crate::template::ViewRegistry;
use std::sync::Arc;

/// Mailer configuration
#[derive(Debug, Clone, Default)]
pub struct MailerConfig {
    /// Delivery backend selection
    pub delivery: DeliveryConfig,
    /// Layout wrapping view-composed bodies, when set
    pub layout: Option<String>,
}

/// Factory for building a [`MailBackend`] from the delivery configuration.
///
/// This indirection keeps unit tests hermetic and lets them assert that no
/// transport is touched on early failures.
#[cfg_attr(test, mockall::automock)]
pub trait BackendFactory: Send + Sync {
    fn create(
        &self,
        config: &DeliveryConfig,
        flash: &FlashStore,
    ) -> Result<Box<dyn MailBackend>, MailError>;
}

struct DefaultBackendFactory;

impl BackendFactory for DefaultBackendFactory {
    fn create(
        &self,
        config: &DeliveryConfig,
        flash: &FlashStore,
    ) -> Result<Box<dyn MailBackend>, MailError> {
        match config {
            DeliveryConfig::Sendmail(sendmail) => {
                Ok(Box::new(SendmailBackend::new(sendmail.clone())))
            }
            DeliveryConfig::Smtp(smtp) => Ok(Box::new(SmtpBackend::from_config(smtp)?)),
            DeliveryConfig::Debug => Ok(Box::new(DebugBackend::new(
                flash.clone(),
                default_mailer_ident(),
            ))),
            DeliveryConfig::Noop => Ok(Box::new(NoopBackend::new())),
        }
    }
}

/// Sends composed messages through the configured delivery backend.
///
/// The backend is selected once at configuration time; a send either is
/// accepted by that backend or fails - there is no fallback to another
/// backend.
pub struct Mailer {
    config: MailerConfig,
    views: ViewRegistry,
    flash: FlashStore,
    factory: Arc<dyn BackendFactory>,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            config,
            views: ViewRegistry::new(),
            flash: FlashStore::new(),
            factory: Arc::new(DefaultBackendFactory),
        }
    }

    /// Attach the view registry used by [`Mailer::send_view`]
    pub fn with_views(mut self, views: ViewRegistry) -> Self {
        self.views = views;
        self
    }

    /// Share an existing flash store with the debug backend
    pub fn with_flash_store(mut self, flash: FlashStore) -> Self {
        self.flash = flash;
        self
    }

    #[cfg(test)]
    fn with_factory(mut self, factory: Arc<dyn BackendFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// The flash store the debug backend parks fragments in
    pub fn flash(&self) -> &FlashStore {
        &self.flash
    }

    /// Send a message with its literal body
    pub async fn send(&self, message: &MailMessage) -> Result<DeliveryReceipt, MailError> {
        self.dispatch(message, message.body.clone()).await
    }

    /// Send a message with a body composed from a named view.
    ///
    /// The view receives `vars` plus the implicit message bindings; the
    /// configured layout, when set, wraps the rendered view. The message's
    /// literal `body` field is ignored on this path.
    pub async fn send_view(
        &self,
        message: &MailMessage,
        view: &str,
        vars: &[(&str, &str)],
    ) -> Result<DeliveryReceipt, MailError> {
        let body = self
            .views
            .compose(view, self.config.layout.as_deref(), vars, message)?;
        self.dispatch(message, body).await
    }

    async fn dispatch(
        &self,
        message: &MailMessage,
        body: String,
    ) -> Result<DeliveryReceipt, MailError> {
        // Recipient resolution comes first: an empty 'to' fails the send
        // before any backend is constructed or touched.
        let to = message.to.join().ok_or(MailError::EmptyRecipients)?;

        let backend = self.factory.create(&self.config.delivery, &self.flash)?;

        tracing::debug!(
            backend = backend.backend_name(),
            to = %to,
            subject = %message.subject,
            "dispatching mail"
        );

        let mail = OutboundMail {
            to,
            body,
            message: message.clone(),
        };

        backend.send(&mail).await.map_err(|e| {
            tracing::error!(backend = backend.backend_name(), "mail send failed: {}", e);
            e
        })
    }
}
