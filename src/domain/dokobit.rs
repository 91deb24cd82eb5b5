//! Dokobit login widget option types

use serde::{Deserialize, Serialize};

/// Default id of the widget container element
pub const DEFAULT_CONTAINER_ID: &str = "Dokobit-identity-container";

/// Default url of the gateway integration script
pub const DEFAULT_JS_URL: &str =
    "https://id-sandbox.dokobit.com/js/dokobit-integration.min.js";

/// Client-side options passed to the `DokobitIdentity` initializer.
///
/// The recognized keys mirror the gateway plugin documentation; unset keys
/// are omitted from the serialized object so the plugin falls back to its
/// own defaults. `sessionToken` and `container` are not represented here -
/// the widget merges them in at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DokobitLoginOptions {
    /// Name of the function called after successful authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,

    /// Host for API requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Interface language ("en", "lt", "lv", "et", "is", "ru")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Enable the default validator on form fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_validator: Option<bool>,

    /// Enable plugin debugging mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Path to a custom logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Custom background color for the main container and input fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_background: Option<String>,

    /// Primary color for buttons, links and inputs, HEX or RGBA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
}
