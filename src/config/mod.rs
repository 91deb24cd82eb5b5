//! Configuration management for sitekit

use crate::domain::{DeliveryConfig, SendmailConfig, SmtpConfig, DEFAULT_JS_URL};
use crate::mail::MailerConfig;
use crate::vau::{DEFAULT_LOGIN_BASE, DEFAULT_LOGOUT_BASE};
use anyhow::{bail, Context, Result};
use std::env;

/// Component configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Mailer configuration
    pub mailer: MailerConfig,
    /// Asset publishing configuration
    pub assets: AssetConfig,
    /// VauID SSO configuration
    pub vau: VauConfig,
    /// Dokobit widget configuration
    pub dokobit: DokobitConfig,
}

#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Web-servable directory published assets are copied beneath
    pub public_root: String,
    /// Public base URL mapped to `public_root`
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct VauConfig {
    /// Gateway login base URL
    pub login_base: String,
    /// Gateway logout base URL
    pub logout_base: String,
    /// Absolute base URL of this application, used for callback URLs
    pub app_base_url: String,
}

#[derive(Debug, Clone)]
pub struct DokobitConfig {
    /// Url of the gateway integration script
    pub js_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or malformed required values are reported as a configuration
    /// error before any component is constructed.
    pub fn from_env() -> crate::error::Result<Self> {
        Self::load_env().map_err(|e| crate::error::Error::Configuration(format!("{:#}", e)))
    }

    fn load_env() -> Result<Self> {
        let app_base_url = env::var("APP_BASE_URL").context("APP_BASE_URL is required")?;
        url::Url::parse(&app_base_url)
            .with_context(|| format!("APP_BASE_URL is not an absolute URL: {}", app_base_url))?;

        Ok(Self {
            mailer: MailerConfig {
                delivery: delivery_from_env()?,
                layout: env::var("MAIL_LAYOUT").ok(),
            },
            assets: AssetConfig {
                public_root: env::var("ASSETS_PATH").unwrap_or_else(|_| "assets".to_string()),
                base_url: env::var("ASSETS_BASE_URL").unwrap_or_else(|_| "/assets".to_string()),
            },
            vau: VauConfig {
                login_base: env::var("VAU_LOGIN_URL")
                    .unwrap_or_else(|_| DEFAULT_LOGIN_BASE.to_string()),
                logout_base: env::var("VAU_LOGOUT_URL")
                    .unwrap_or_else(|_| DEFAULT_LOGOUT_BASE.to_string()),
                app_base_url,
            },
            dokobit: DokobitConfig {
                js_url: env::var("DOKOBIT_JS_URL").unwrap_or_else(|_| DEFAULT_JS_URL.to_string()),
            },
        })
    }
}

fn delivery_from_env() -> Result<DeliveryConfig> {
    let delivery = env::var("MAIL_DELIVERY").unwrap_or_else(|_| "noop".to_string());

    match delivery.as_str() {
        "sendmail" => Ok(DeliveryConfig::Sendmail(SendmailConfig {
            command: env::var("SENDMAIL_COMMAND")
                .unwrap_or_else(|_| SendmailConfig::default().command),
            extra_args: env::var("SENDMAIL_EXTRA_ARGS")
                .map(|args| split_args(&args))
                .unwrap_or_default(),
            line_length: env::var("MAIL_LINE_LENGTH")
                .unwrap_or_else(|_| "70".to_string())
                .parse()
                .context("Invalid MAIL_LINE_LENGTH")?,
            mailer_ident: SendmailConfig::default().mailer_ident,
        })),
        "smtp" => Ok(DeliveryConfig::Smtp(SmtpConfig {
            host: env::var("SMTP_HOST").context("SMTP_HOST is required for smtp delivery")?,
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .context("Invalid SMTP_PORT")?,
            auth: parse_bool(&env::var("SMTP_AUTH").unwrap_or_else(|_| "false".to_string())),
            username: env::var("SMTP_USERNAME").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            use_tls: parse_bool(&env::var("SMTP_USE_TLS").unwrap_or_else(|_| "true".to_string())),
        })),
        "debug" => Ok(DeliveryConfig::Debug),
        "noop" => Ok(DeliveryConfig::Noop),
        other => bail!("Unknown MAIL_DELIVERY: {}", other),
    }
}

fn parse_bool(value: &str) -> bool {
    value.to_lowercase() == "true"
}

fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}
