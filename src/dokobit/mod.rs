//! Dokobit identity-gateway login widget
//!
//! Embeds the gateway UI so a user can authenticate without leaving the
//! site. The widget renders a container tag and registers the integration
//! script plus an inline initializer carrying the serialized options; the
//! gateway's own script drives everything from there. The session token
//! comes from the gateway's session-creation API call made by the host
//! application before rendering.

use crate::domain::{DokobitLoginOptions, DEFAULT_CONTAINER_ID, DEFAULT_JS_URL};
use crate::html::{self, Position, ScriptRegistry, JQUERY_URL};
use thiserror::Error;

/// Widget error types
#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("session token has to be set")]
    MissingSessionToken,
}

/// Login widget embedding the Dokobit identity gateway
#[derive(Debug, Clone)]
pub struct DokobitLoginWidget {
    session_token: String,
    options: DokobitLoginOptions,
    container_attrs: Vec<(String, String)>,
    js_url: String,
    jquery_url: String,
    visible: bool,
}

impl DokobitLoginWidget {
    /// Create a widget for one authentication attempt.
    ///
    /// `session_token` is the token returned by the gateway's
    /// session-creation endpoint; it is the one required input.
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            options: DokobitLoginOptions::default(),
            container_attrs: Vec::new(),
            js_url: DEFAULT_JS_URL.to_string(),
            jquery_url: JQUERY_URL.to_string(),
            visible: true,
        }
    }

    /// Set the client-side plugin options
    pub fn options(mut self, options: DokobitLoginOptions) -> Self {
        self.options = options;
        self
    }

    /// Add an HTML attribute to the container tag
    pub fn container_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.container_attrs.push((key.into(), value.into()));
        self
    }

    /// Override the integration script url (e.g. to leave the sandbox)
    pub fn js_url(mut self, url: impl Into<String>) -> Self {
        self.js_url = url.into();
        self
    }

    /// Override the jQuery dependency url
    pub fn jquery_url(mut self, url: impl Into<String>) -> Self {
        self.jquery_url = url.into();
        self
    }

    /// Hide the widget without dropping its configuration
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Render the container fragment and register the client scripts.
    ///
    /// An invisible widget renders nothing and registers nothing. The
    /// container tag and the inline script always agree on the container
    /// selector: an `id` attribute supplied by the caller wins, otherwise
    /// the default id is assigned to the tag and used for the selector.
    pub fn render(&self, registry: &mut ScriptRegistry) -> Result<String, WidgetError> {
        if !self.visible {
            return Ok(String::new());
        }

        if self.session_token.trim().is_empty() {
            return Err(WidgetError::MissingSessionToken);
        }

        let mut attrs = self.container_attrs.clone();
        let container_id = match attrs.iter().find(|(key, _)| key == "id") {
            Some((_, id)) => id.clone(),
            None => {
                attrs.push(("id".to_string(), DEFAULT_CONTAINER_ID.to_string()));
                DEFAULT_CONTAINER_ID.to_string()
            }
        };

        let options = self.serialized_options(&container_id);
        registry.register_script_file(self.jquery_url.clone(), Position::BodyEnd);
        registry.register_script_file(self.js_url.clone(), Position::BodyEnd);
        registry.register_script(
            "dokobit-login",
            format!("var dokobitIdentity = new DokobitIdentity({}).init();", options),
            Position::BodyEnd,
        );

        Ok(format!(
            "{}\n{}",
            html::open_tag("div", &attrs),
            html::close_tag("div")
        ))
    }

    fn serialized_options(&self, container_id: &str) -> String {
        let mut options = match serde_json::to_value(&self.options) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        options.insert(
            "sessionToken".to_string(),
            serde_json::Value::String(self.session_token.clone()),
        );
        options.insert(
            "container".to_string(),
            serde_json::Value::String(format!("#{}", container_id)),
        );

        serde_json::Value::Object(options).to_string()
    }
}
