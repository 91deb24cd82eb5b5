//! Mail message domain types

use serde::{Deserialize, Serialize};

/// Content type of a mail message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// `text/html`
    #[default]
    Html,
    /// `text/plain`
    Text,
}

impl ContentType {
    /// MIME type string as it appears in a `Content-Type` header
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Text => "text/plain",
        }
    }
}

/// One address or a list of addresses, as configured by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Join into a single header-compatible string.
    ///
    /// A scalar address passes through untouched; a list joins with `", "`.
    /// Empty entries are dropped. Returns `None` when nothing remains.
    pub fn join(&self) -> Option<String> {
        let joined = match self {
            Self::One(addr) => addr.trim().to_string(),
            Self::Many(addrs) => addrs
                .iter()
                .map(|a| a.trim())
                .filter(|a| !a.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        };

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

impl From<&str> for Recipients {
    fn from(addr: &str) -> Self {
        Self::One(addr.to_string())
    }
}

impl From<String> for Recipients {
    fn from(addr: String) -> Self {
        Self::One(addr)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addrs: Vec<String>) -> Self {
        Self::Many(addrs)
    }
}

/// A mail message to be sent through a delivery backend
#[derive(Debug, Clone)]
pub struct MailMessage {
    /// Receiver or receivers of the mail
    pub to: Recipients,
    /// Sender address
    pub from: Option<String>,
    /// Sender display name
    pub from_name: Option<String>,
    /// Reply-To address
    pub reply_to: Option<String>,
    /// Bounce-handling address, distinct from the visible `From` header
    pub return_path: Option<String>,
    /// Visible carbon-copy recipients
    pub cc: Option<Recipients>,
    /// Hidden carbon-copy recipients
    pub bcc: Option<Recipients>,
    /// Subject line
    pub subject: String,
    /// Literal body content; ignored when the mailer composes from a view
    pub body: String,
    /// Body content type
    pub content_type: ContentType,
    /// Body character set
    pub charset: String,
}

impl MailMessage {
    pub fn new(to: impl Into<Recipients>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: None,
            from_name: None,
            reply_to: None,
            return_path: None,
            cc: None,
            bcc: None,
            subject: subject.into(),
            body: String::new(),
            content_type: ContentType::default(),
            charset: "utf-8".to_string(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn from_name(mut self, name: impl Into<String>) -> Self {
        self.from_name = Some(name.into());
        self
    }

    pub fn reply_to(mut self, addr: impl Into<String>) -> Self {
        self.reply_to = Some(addr.into());
        self
    }

    pub fn return_path(mut self, addr: impl Into<String>) -> Self {
        self.return_path = Some(addr.into());
        self
    }

    pub fn cc(mut self, cc: impl Into<Recipients>) -> Self {
        self.cc = Some(cc.into());
        self
    }

    pub fn bcc(mut self, bcc: impl Into<Recipients>) -> Self {
        self.bcc = Some(bcc.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }
}
