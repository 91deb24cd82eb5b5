//! SMTP delivery backend using lettre

use super::backend::{DeliveryReceipt, MailBackend, MailError, OutboundMail};
use crate::domain::{ContentType, SmtpConfig};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType as LettreContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Alternate plain-text body sent alongside an HTML body
const ALT_BODY: &str = "To view the message, please use an HTML compatible email viewer!";

/// SMTP-based delivery backend
#[derive(Debug)]
pub struct SmtpBackend {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpBackend {
    /// Create a backend from configuration.
    ///
    /// Required fields are checked before any connection attempt: the host
    /// must be set, and enabling `auth` requires both username and password.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        if config.host.trim().is_empty() {
            return Err(MailError::ConfigurationMissing(
                "SMTP host is not set".to_string(),
            ));
        }

        let credentials = if config.auth {
            match (&config.username, &config.password) {
                (Some(username), Some(password)) => {
                    Some(Credentials::new(username.clone(), password.clone()))
                }
                _ => {
                    return Err(MailError::ConfigurationMissing(
                        "SMTP auth is enabled but username or password is not set".to_string(),
                    ))
                }
            }
        } else {
            None
        };

        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| MailError::ConfigurationMissing(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        builder = builder.port(config.port);

        if let Some(credentials) = credentials {
            builder = builder.credentials(credentials);
        }

        Ok(Self {
            transport: builder.build(),
        })
    }

    /// Test the connection to the relay
    pub async fn test_connection(&self) -> Result<(), MailError> {
        self.transport
            .test_connection()
            .await
            .map(|_| ())
            .map_err(|e| MailError::TransportFailure(e.to_string()))
    }

    fn build_message(&self, mail: &OutboundMail) -> Result<Message, MailError> {
        let message = &mail.message;

        let from_addr = message
            .from
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| {
                MailError::ConfigurationMissing("sender address is not set".to_string())
            })?;

        let from = parse_mailbox(from_addr, message.from_name.as_deref())?;

        // Reply to the configured address, falling back to the sender
        let reply_to = match message.reply_to.as_deref() {
            Some(addr) if !addr.trim().is_empty() => parse_mailbox(addr, None)?,
            _ => from.clone(),
        };

        let mut builder = Message::builder()
            .from(from)
            .reply_to(reply_to)
            .subject(&message.subject);

        for part in mail.to.split(',') {
            let addr = part.trim();
            if !addr.is_empty() {
                builder = builder.to(parse_mailbox(addr, None)?);
            }
        }

        if let Some(return_path) = message
            .return_path
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
        {
            builder = builder.sender(parse_mailbox(return_path, None)?);
        }

        let email = match message.content_type {
            ContentType::Html => builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(LettreContentType::TEXT_PLAIN)
                                .body(ALT_BODY.to_string()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(LettreContentType::TEXT_HTML)
                                .body(mail.body.clone()),
                        ),
                )
                .map_err(|e| MailError::TransportFailure(e.to_string()))?,
            ContentType::Text => builder
                .header(LettreContentType::TEXT_PLAIN)
                .body(mail.body.clone())
                .map_err(|e| MailError::TransportFailure(e.to_string()))?,
        };

        Ok(email)
    }
}

fn parse_mailbox(addr: &str, name: Option<&str>) -> Result<Mailbox, MailError> {
    let spec = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{} <{}>", name, addr),
        None => addr.to_string(),
    };

    spec.parse()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", addr, e)))
}

#[async_trait]
impl MailBackend for SmtpBackend {
    async fn send(&self, mail: &OutboundMail) -> Result<DeliveryReceipt, MailError> {
        let email = self.build_message(mail)?;

        match self.transport.send(email).await {
            Ok(response) => {
                let message_id = response.message().next().map(|s| s.to_string());
                Ok(DeliveryReceipt::accepted(self.backend_name()).with_message_id(message_id))
            }
            Err(e) => {
                tracing::error!("SMTP send failed: {}", e);
                Err(MailError::TransportFailure(e.to_string()))
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MailMessage;

    fn test_config() -> SmtpConfig {
        SmtpConfig {
            host: "localhost".to_string(),
            port: 1025,
            auth: false,
            username: None,
            password: None,
            use_tls: false,
        }
    }

    fn outbound(message: MailMessage) -> OutboundMail {
        OutboundMail {
            to: message.to.join().unwrap(),
            body: message.body.clone(),
            message,
        }
    }

    #[test]
    fn test_backend_creation() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        assert_eq!(backend.backend_name(), "smtp");
    }

    #[test]
    fn test_backend_creation_with_auth() {
        let config = SmtpConfig {
            host: "mail.example.com".to_string(),
            port: 2525,
            auth: true,
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            use_tls: true,
        };
        assert!(SmtpBackend::from_config(&config).is_ok());
    }

    #[test]
    fn test_missing_host_is_configuration_error() {
        let config = SmtpConfig {
            host: "  ".to_string(),
            ..test_config()
        };
        let err = SmtpBackend::from_config(&config).unwrap_err();
        assert!(matches!(err, MailError::ConfigurationMissing(_)));
    }

    #[test]
    fn test_auth_without_credentials_is_configuration_error() {
        let config = SmtpConfig {
            auth: true,
            username: Some("user".to_string()),
            password: None,
            ..test_config()
        };
        let err = SmtpBackend::from_config(&config).unwrap_err();
        assert!(matches!(err, MailError::ConfigurationMissing(_)));
    }

    #[test]
    fn test_build_message_requires_sender() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let mail = outbound(MailMessage::new("to@example.com", "Hi").body("<p>x</p>"));

        let err = backend.build_message(&mail).unwrap_err();
        assert!(matches!(err, MailError::ConfigurationMissing(_)));
    }

    #[test]
    fn test_build_message_html_is_multipart_alternative() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let mail = outbound(
            MailMessage::new("to@example.com", "Hi")
                .from("from@example.com")
                .from_name("Sender")
                .body("<p>x</p>"),
        );

        let email = backend.build_message(&mail).unwrap();
        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("multipart/alternative"));
        assert!(formatted.contains(ALT_BODY));
    }

    #[test]
    fn test_build_message_text_is_single_part() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let mail = outbound(
            MailMessage::new("to@example.com", "Hi")
                .from("from@example.com")
                .content_type(ContentType::Text)
                .body("plain words"),
        );

        let email = backend.build_message(&mail).unwrap();
        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(!formatted.contains("multipart/alternative"));
        assert!(formatted.contains("plain words"));
    }

    #[test]
    fn test_build_message_joined_recipients() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let message = MailMessage::new(
            vec!["a@example.com".to_string(), "b@example.com".to_string()],
            "Hi",
        )
        .from("from@example.com")
        .body("x");
        let mail = outbound(message);

        let email = backend.build_message(&mail).unwrap();
        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("a@example.com"));
        assert!(formatted.contains("b@example.com"));
    }

    #[test]
    fn test_build_message_invalid_recipient() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let mail = OutboundMail {
            to: "not an address".to_string(),
            body: "x".to_string(),
            message: MailMessage::new("not an address", "Hi").from("from@example.com"),
        };

        let err = backend.build_message(&mail).unwrap_err();
        assert!(matches!(err, MailError::InvalidAddress(_)));
    }

    #[test]
    fn test_reply_to_falls_back_to_sender() {
        let backend = SmtpBackend::from_config(&test_config()).unwrap();
        let mail = outbound(
            MailMessage::new("to@example.com", "Hi")
                .from("from@example.com")
                .body("x"),
        );

        let email = backend.build_message(&mail).unwrap();
        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("Reply-To: from@example.com"));
    }
}
