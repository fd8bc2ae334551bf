//! Store configuration.

use serde::Deserialize;

use super::theme::Theme;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "ui-theme";

/// Configuration accepted by [`ThemeStore`](crate::ThemeStore).
///
/// Both fields are optional when deserializing; missing fields take the
/// defaults (`system`, `"ui-theme"`).
///
/// # Example
///
/// ```rust
/// use themeswitch::{Theme, ThemeConfig};
///
/// let config = ThemeConfig::from_json(r#"{ "default_theme": "dark" }"#).unwrap();
/// assert_eq!(config.default_theme, Theme::Dark);
/// assert_eq!(config.storage_key, "ui-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme used when nothing valid is persisted.
    pub default_theme: Theme,
    /// Key the preference is persisted under.
    pub storage_key: String,
}

impl ThemeConfig {
    pub fn new(default_theme: Theme, storage_key: impl Into<String>) -> Self {
        Self {
            default_theme,
            storage_key: storage_key.into(),
        }
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::System,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
