//! Delivery backend configuration types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery backend selection - chosen once at configuration time,
/// immutable per dispatch call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeliveryConfig {
    /// Pipe through the platform sendmail binary
    Sendmail(SendmailConfig),

    /// SMTP relay via lettre
    Smtp(SmtpConfig),

    /// Render into the flash store instead of transmitting
    Debug,

    /// Accept and drop - for disabling mail in non-production environments
    #[default]
    Noop,
}

impl DeliveryConfig {
    /// Get the backend type as a string
    pub fn backend_type(&self) -> &'static str {
        match self {
            Self::Sendmail(_) => "sendmail",
            Self::Smtp(_) => "smtp",
            Self::Debug => "debug",
            Self::Noop => "noop",
        }
    }
}

/// Configuration for the platform sendmail backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendmailConfig {
    /// Path to the sendmail binary
    #[serde(default = "default_sendmail_command")]
    pub command: String,

    /// Extra command-line arguments, typically `-f<address>` for
    /// envelope-sender control
    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Body word-wrap column, per RFC 2822 section 2.1.1
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    /// Value of the emitted `X-Mailer` header
    #[serde(default = "default_mailer_ident")]
    pub mailer_ident: String,
}

impl Default for SendmailConfig {
    fn default() -> Self {
        Self {
            command: default_sendmail_command(),
            extra_args: vec![],
            line_length: default_line_length(),
            mailer_ident: default_mailer_ident(),
        }
    }
}

/// SMTP relay configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct SmtpConfig {
    /// SMTP server host
    #[validate(length(min = 1, max = 255))]
    pub host: String,

    /// SMTP server port (typically 587 for STARTTLS, 465 for SSL, 25 plain)
    #[serde(default = "default_smtp_port")]
    pub port: u16,

    /// Whether the relay requires authentication
    #[serde(default)]
    pub auth: bool,

    /// Username for authentication; required when `auth` is set
    pub username: Option<String>,

    /// Password for authentication; required when `auth` is set
    pub password: Option<String>,

    /// Use STARTTLS encryption
    #[serde(default = "default_true")]
    pub use_tls: bool,
}

fn default_sendmail_command() -> String {
    "/usr/sbin/sendmail".to_string()
}

fn default_line_length() -> usize {
    70
}

pub(crate) fn default_mailer_ident() -> String {
    format!("sitekit/{}", env!("CARGO_PKG_VERSION"))
}

fn default_smtp_port() -> u16 {
    587
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_config_default_is_noop() {
        let config = DeliveryConfig::default();
        assert!(matches!(config, DeliveryConfig::Noop));
        assert_eq!(config.backend_type(), "noop");
    }

    #[test]
    fn test_backend_type_names() {
        assert_eq!(
            DeliveryConfig::Sendmail(SendmailConfig::default()).backend_type(),
            "sendmail"
        );
        assert_eq!(
            DeliveryConfig::Smtp(SmtpConfig {
                host: "mail.example.com".to_string(),
                port: 587,
                auth: false,
                username: None,
                password: None,
                use_tls: true,
            })
            .backend_type(),
            "smtp"
        );
        assert_eq!(DeliveryConfig::Debug.backend_type(), "debug");
    }

    #[test]
    fn test_sendmail_config_defaults() {
        let config = SendmailConfig::default();
        assert_eq!(config.command, "/usr/sbin/sendmail");
        assert!(config.extra_args.is_empty());
        assert_eq!(config.line_length, 70);
        assert!(config.mailer_ident.starts_with("sitekit/"));
    }

    #[test]
    fn test_delivery_config_serialization() {
        let config = DeliveryConfig::Smtp(SmtpConfig {
            host: "mail.example.com".to_string(),
            port: 2525,
            auth: true,
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            use_tls: true,
        });

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"smtp\""));

        let parsed: DeliveryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_delivery_config_deserialization_defaults() {
        let json = r#"{"type": "sendmail"}"#;
        let config: DeliveryConfig = serde_json::from_str(json).unwrap();
        if let DeliveryConfig::Sendmail(sendmail) = config {
            assert_eq!(sendmail.command, "/usr/sbin/sendmail");
            assert_eq!(sendmail.line_length, 70);
        } else {
            panic!("Expected sendmail config");
        }

        let json = r#"{"type": "smtp", "host": "mail.example.com"}"#;
        let config: DeliveryConfig = serde_json::from_str(json).unwrap();
        if let DeliveryConfig::Smtp(smtp) = config {
            assert_eq!(smtp.port, 587);
            assert!(smtp.use_tls);
            assert!(!smtp.auth);
        } else {
            panic!("Expected SMTP config");
        }
    }

    #[test]
    fn test_smtp_config_validation() {
        let config = SmtpConfig {
            host: "".to_string(),
            port: 587,
            auth: false,
            username: None,
            password: None,
            use_tls: true,
        };
        assert!(config.validate().is_err());

        let config = SmtpConfig {
            host: "mail.example.com".to_string(),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
