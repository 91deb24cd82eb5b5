//! Unified error handling for sitekit

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error wrapping the per-component error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Mail error: {0}")]
    Mail(#[from] crate::mail::MailError),

    #[error("Template error: {0}")]
    Template(#[from] crate::template::TemplateError),

    #[error("Asset error: {0}")]
    Asset(#[from] crate::assets::AssetError),

    #[error("Widget error: {0}")]
    Widget(#[from] crate::dokobit::WidgetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_prefixed() {
        let err = Error::Configuration("SMTP_HOST is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: SMTP_HOST is required"
        );
    }

    #[test]
    fn test_mail_error_converts() {
        let err: Error = crate::mail::MailError::EmptyRecipients.into();
        assert!(matches!(err, Error::Mail(_)));
    }

    #[test]
    fn test_widget_error_converts() {
        let err: Error = crate::dokobit::WidgetError::MissingSessionToken.into();
        assert!(matches!(err, Error::Widget(_)));
    }
}
