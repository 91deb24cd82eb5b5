//! Message body templating
//!
//! Provides simple variable substitution for mail views.
//! Variables are specified using {{variable_name}} syntax. Views are kept
//! in a [`ViewRegistry`] under a name; a view may be wrapped by a layout
//! whose `{{content}}` slot receives the rendered view.

use crate::domain::MailMessage;
use std::collections::HashMap;
use thiserror::Error;

/// Template error types
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),
}

/// Template rendering engine with variable substitution
#[derive(Debug, Default)]
pub struct TemplateEngine {
    variables: HashMap<String, String>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Set multiple variables from an iterator
    pub fn set_all<I, K, V>(&mut self, iter: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in iter {
            self.variables.insert(k.into(), v.into());
        }
        self
    }

    /// Render a template string, replacing {{variable}} with values
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }
}

/// Named view and layout templates for mail bodies
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, String>,
    layouts: HashMap<String, String>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view template under a name
    pub fn add_view(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.views.insert(name.into(), template.into());
        self
    }

    /// Register a layout template under a name.
    ///
    /// A layout wraps a rendered view through its `{{content}}` slot.
    pub fn add_layout(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.layouts.insert(name.into(), template.into());
        self
    }

    pub fn has_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// Compose a message body from a named view.
    ///
    /// The view receives the supplied variables plus implicit bindings for
    /// the message fields (`subject`, `to`, `from`, `from_name`), so a view
    /// can read message data the same way the caller-supplied variables are
    /// read. When `layout` is given, the rendered view is bound to the
    /// layout's `content` slot.
    pub fn compose(
        &self,
        view: &str,
        layout: Option<&str>,
        vars: &[(&str, &str)],
        message: &MailMessage,
    ) -> Result<String, TemplateError> {
        let template = self
            .views
            .get(view)
            .ok_or_else(|| TemplateError::UnknownView(view.to_string()))?;

        let mut engine = TemplateEngine::new();
        engine.set_all(vars.iter().copied());
        engine
            .set("subject", &message.subject)
            .set("to", message.to.join().unwrap_or_default())
            .set("from", message.from.clone().unwrap_or_default())
            .set("from_name", message.from_name.clone().unwrap_or_default());

        let rendered = engine.render(template);

        match layout {
            None => Ok(rendered),
            Some(name) => {
                let layout_template = self
                    .layouts
                    .get(name)
                    .ok_or_else(|| TemplateError::UnknownLayout(name.to_string()))?;

                let mut layout_engine = TemplateEngine::new();
                layout_engine.set("content", rendered);
                Ok(layout_engine.render(layout_template))
            }
        }
    }
}
