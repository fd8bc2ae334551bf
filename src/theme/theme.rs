//! The three-way theme preference and its rotation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseThemeError;
use super::mode::ColorMode;

/// A user's theme preference.
///
/// `System` defers to the host's color-scheme signal; the other two variants
/// map directly onto a [`ColorMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Every theme, in rotation order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Returns the canonical (persisted) name of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Returns the theme that follows `self` in the toggle rotation.
    ///
    /// With `include_system_preference` the rotation is
    /// `light -> dark -> system -> light`; without it, `light -> dark -> light`
    /// and `system` falls back to `light`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeswitch::Theme;
    ///
    /// assert_eq!(Theme::Light.next(false), Theme::Dark);
    /// assert_eq!(Theme::Dark.next(false), Theme::Light);
    /// assert_eq!(Theme::Dark.next(true), Theme::System);
    /// ```
    pub fn next(self, include_system_preference: bool) -> Theme {
        match (self, include_system_preference) {
            (Theme::Light, _) => Theme::Dark,
            (Theme::Dark, true) => Theme::System,
            _ => Theme::Light,
        }
    }

    /// Resolves the concrete color mode, consulting `prefers_dark` only for `System`.
    pub fn resolve(self, prefers_dark: bool) -> ColorMode {
        match self {
            Theme::Light => ColorMode::Light,
            Theme::Dark => ColorMode::Dark,
            Theme::System => ColorMode::from_prefers_dark(prefers_dark),
        }
    }

    pub fn is_system(self) -> bool {
        self == Theme::System
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_theme() -> impl Strategy<Value = Theme> {
        prop::sample::select(Theme::ALL.to_vec())
    }

    #[test]
    fn test_two_cycle_rotation() {
        let first = Theme::Light.next(false);
        assert_eq!(first, Theme::Dark);
        assert_eq!(first.next(false), Theme::Light);
    }

    #[test]
    fn test_three_cycle_rotation() {
        let mut theme = Theme::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            theme = theme.next(true);
            seen.push(theme);
        }
        assert_eq!(seen, vec![Theme::Dark, Theme::System, Theme::Light]);
    }

    #[test]
    fn test_system_without_inclusion_falls_back_to_light() {
        assert_eq!(Theme::System.next(false), Theme::Light);
    }

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("system".parse::<Theme>().unwrap(), Theme::System);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.value, "Dark");
        assert!("".parse::<Theme>().is_err());
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::Light.resolve(true), ColorMode::Light);
        assert_eq!(Theme::Dark.resolve(false), ColorMode::Dark);
        assert_eq!(Theme::System.resolve(true), ColorMode::Dark);
        assert_eq!(Theme::System.resolve(false), ColorMode::Light);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), "\"system\"");
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }

    proptest! {
        #[test]
        fn prop_display_parses_back(theme in any_theme()) {
            prop_assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }

        #[test]
        fn prop_rotation_never_yields_system_without_inclusion(theme in any_theme()) {
            prop_assert_ne!(theme.next(false), Theme::System);
        }

        #[test]
        fn prop_rotation_period(theme in any_theme(), include in any::<bool>()) {
            // Start from a theme that is part of the cycle.
            let start = if include { theme } else { theme.next(false) };
            let period = if include { 3 } else { 2 };
            let mut current = start;
            for _ in 0..period {
                current = current.next(include);
            }
            prop_assert_eq!(current, start);
        }
    }
}
