//! HTML fragment helpers and the client-script registry
//!
//! Components do not write to the page directly; they register stylesheets
//! and scripts in a [`ScriptRegistry`] and the host application renders the
//! collected includes into the document head and the end of the body. Output
//! order follows registration order within each position, with script files
//! always rendered before inline scripts so an initializer can rely on the
//! files it references having been loaded.

/// Default url of the jQuery core script shared by script-registering
/// components
pub const JQUERY_URL: &str = "https://code.jquery.com/jquery-3.7.1.min.js";

/// Escape text for use in HTML content or attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an opening tag with attributes in the given order
pub fn open_tag(name: &str, attrs: &[(String, String)]) -> String {
    let mut out = format!("<{}", name);
    for (key, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
    }
    out.push('>');
    out
}

/// Render a closing tag
pub fn close_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Where a registered script is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Document head
    Head,
    /// End of the document body
    BodyEnd,
}

/// Collects registered includes and renders them per position.
///
/// Registrations are deduplicated: a stylesheet or script file by url, an
/// inline block by its id. The first registration wins and keeps its slot
/// in the output order.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    css_files: Vec<String>,
    inline_css: Vec<(String, String, String)>,
    script_files: Vec<(String, Position)>,
    inline_scripts: Vec<(String, String, Position)>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stylesheet file for the document head
    pub fn register_css_file(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.css_files.contains(&url) {
            self.css_files.push(url);
        }
    }

    /// Register an inline style block with a media query
    pub fn register_css(
        &mut self,
        id: impl Into<String>,
        css: impl Into<String>,
        media: impl Into<String>,
    ) {
        let id = id.into();
        if !self.inline_css.iter().any(|(i, _, _)| *i == id) {
            self.inline_css.push((id, css.into(), media.into()));
        }
    }

    /// Register a script file at a position
    pub fn register_script_file(&mut self, url: impl Into<String>, position: Position) {
        let url = url.into();
        if !self.script_files.iter().any(|(u, _)| *u == url) {
            self.script_files.push((url, position));
        }
    }

    /// Register an inline script block at a position
    pub fn register_script(
        &mut self,
        id: impl Into<String>,
        code: impl Into<String>,
        position: Position,
    ) {
        let id = id.into();
        if !self.inline_scripts.iter().any(|(i, _, _)| *i == id) {
            self.inline_scripts.push((id, code.into(), position));
        }
    }

    /// Render the head fragment: stylesheets, style blocks, head scripts
    pub fn render_head(&self) -> String {
        let mut out = String::new();
        for url in &self.css_files {
            out.push_str(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n",
                escape(url)
            ));
        }
        for (_, css, media) in &self.inline_css {
            if media.is_empty() {
                out.push_str(&format!("<style type=\"text/css\">\n{}\n</style>\n", css));
            } else {
                out.push_str(&format!(
                    "<style type=\"text/css\" media=\"{}\">\n{}\n</style>\n",
                    escape(media),
                    css
                ));
            }
        }
        out.push_str(&self.render_scripts(Position::Head));
        out
    }

    /// Render the fragment for the end of the document body
    pub fn render_body_end(&self) -> String {
        self.render_scripts(Position::BodyEnd)
    }

    fn render_scripts(&self, position: Position) -> String {
        let mut out = String::new();
        for (url, pos) in &self.script_files {
            if *pos == position {
                out.push_str(&format!(
                    "<script type=\"text/javascript\" src=\"{}\"></script>\n",
                    escape(url)
                ));
            }
        }
        for (_, code, pos) in &self.inline_scripts {
            if *pos == position {
                out.push_str(&format!(
                    "<script type=\"text/javascript\">\n{}\n</script>\n",
                    code
                ));
            }
        }
        out
    }
}
