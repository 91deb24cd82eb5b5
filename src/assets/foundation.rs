//! Include registration for the Foundation front-end framework
//!
//! Registers the published Foundation stylesheets and scripts in the order
//! the framework needs them: normalize before the core stylesheet, the
//! jQuery dependency before the behavior scripts, and every script before
//! the inline initializer that calls into them.

use crate::html::{Position, ScriptRegistry, JQUERY_URL};

/// Foundation asset registration options
#[derive(Debug, Clone)]
pub struct FoundationAssets {
    /// Register the core stylesheet (foundation.css)
    pub core_css: bool,
    /// Register jQuery and the Foundation scripts
    pub enable_js: bool,
    /// Register jquery.stickyFooter.js for a sticky footer
    pub sticky_footer: bool,
    /// Grid max width; when unset the default from foundation.css applies
    pub max_width: Option<String>,
    /// Url of the jQuery dependency script
    pub jquery_url: String,
}

impl Default for FoundationAssets {
    fn default() -> Self {
        Self {
            core_css: true,
            enable_js: true,
            sticky_footer: false,
            max_width: None,
            jquery_url: JQUERY_URL.to_string(),
        }
    }
}

impl FoundationAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all includes against a published asset base URL
    pub fn register(&self, base_url: &str, registry: &mut ScriptRegistry) {
        let base = base_url.trim_end_matches('/');

        registry.register_css_file(format!("{}/css/normalize.css", base));

        if self.core_css {
            registry.register_css_file(format!("{}/css/foundation.css", base));
        }

        if let Some(max_width) = &self.max_width {
            registry.register_css(
                "foundation-max-width",
                format!(".row {{max-width: {};}}", max_width),
                "screen",
            );
        }

        if self.enable_js {
            registry.register_script_file(self.jquery_url.clone(), Position::BodyEnd);

            if self.sticky_footer {
                registry.register_script_file(
                    format!("{}/js/jquery.stickyFooter.js", base),
                    Position::BodyEnd,
                );
            }

            registry.register_script_file(format!("{}/js/modernizr.js", base), Position::Head);
            registry
                .register_script_file(format!("{}/js/foundation.min.js", base), Position::BodyEnd);
            registry.register_script_file(
                format!("{}/js/foundation.dropdown.js", base),
                Position::BodyEnd,
            );
            registry.register_script(
                "foundation-init",
                "$(document).foundation();",
                Position::BodyEnd,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions_of(haystack: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| haystack.find(n).unwrap_or_else(|| panic!("missing {}", n)))
            .collect()
    }

    #[test]
    fn test_default_registration_order() {
        let mut registry = ScriptRegistry::new();
        FoundationAssets::new().register("/assets/f5", &mut registry);

        let head = registry.render_head();
        let head_order = positions_of(&head, &["normalize.css", "foundation.css", "modernizr.js"]);
        assert!(head_order.windows(2).all(|w| w[0] < w[1]));

        let body_end = registry.render_body_end();
        let body_order = positions_of(
            &body_end,
            &[
                "jquery",
                "foundation.min.js",
                "foundation.dropdown.js",
                "$(document).foundation();",
            ],
        );
        assert!(body_order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_core_css_can_be_disabled() {
        let mut registry = ScriptRegistry::new();
        let assets = FoundationAssets {
            core_css: false,
            ..FoundationAssets::new()
        };
        assets.register("/assets/f5", &mut registry);

        let head = registry.render_head();
        assert!(head.contains("normalize.css"));
        assert!(!head.contains("foundation.css"));
    }

    #[test]
    fn test_max_width_override_is_bound_to_row_selector() {
        let mut registry = ScriptRegistry::new();
        let assets = FoundationAssets {
            max_width: Some("75em".to_string()),
            ..FoundationAssets::new()
        };
        assets.register("/assets/f5", &mut registry);

        let head = registry.render_head();
        assert!(head.contains(".row {max-width: 75em;}"));
        assert!(head.contains("media=\"screen\""));
    }

    #[test]
    fn test_js_can_be_disabled_entirely() {
        let mut registry = ScriptRegistry::new();
        let assets = FoundationAssets {
            enable_js: false,
            ..FoundationAssets::new()
        };
        assets.register("/assets/f5", &mut registry);

        assert!(registry.render_body_end().is_empty());
        assert!(!registry.render_head().contains("modernizr"));
    }

    #[test]
    fn test_sticky_footer_sits_between_jquery_and_foundation() {
        let mut registry = ScriptRegistry::new();
        let assets = FoundationAssets {
            sticky_footer: true,
            ..FoundationAssets::new()
        };
        assets.register("/assets/f5", &mut registry);

        let body_end = registry.render_body_end();
        let order = positions_of(
            &body_end,
            &["jquery-3", "jquery.stickyFooter.js", "foundation.min.js"],
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}
