//! Per-theme labels for the toggle control.

use std::fmt;

use crate::theme::Theme;

/// Optional label overrides, one per theme.
///
/// `C` is whatever the host renders: a `&str`, a `String`, a styled value,
/// a view node.
///
/// # Example
///
/// ```rust
/// use themeswitch::{Theme, ThemeChildren};
///
/// let children = ThemeChildren::new().light("Day").dark("Night");
/// assert_eq!(children.get(Theme::Light), Some(&"Day"));
/// assert_eq!(children.get(Theme::System), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChildren<C> {
    pub light: Option<C>,
    pub dark: Option<C>,
    pub system: Option<C>,
}

impl<C> ThemeChildren<C> {
    pub fn new() -> Self {
        Self {
            light: None,
            dark: None,
            system: None,
        }
    }

    pub fn light(mut self, content: C) -> Self {
        self.light = Some(content);
        self
    }

    pub fn dark(mut self, content: C) -> Self {
        self.dark = Some(content);
        self
    }

    pub fn system(mut self, content: C) -> Self {
        self.system = Some(content);
        self
    }

    /// Returns the override for `theme`, if any.
    pub fn get(&self, theme: Theme) -> Option<&C> {
        match theme {
            Theme::Light => self.light.as_ref(),
            Theme::Dark => self.dark.as_ref(),
            Theme::System => self.system.as_ref(),
        }
    }
}

impl<C> Default for ThemeChildren<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved label: either caller-supplied content or the theme's name.
#[derive(Debug, PartialEq, Eq)]
pub enum ThemeLabel<'a, C> {
    Custom(&'a C),
    Fallback(&'static str),
}

impl<C> ThemeLabel<'_, C> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ThemeLabel::Fallback(_))
    }
}

impl<C> Clone for ThemeLabel<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ThemeLabel<'_, C> {}

impl<C: fmt::Display> fmt::Display for ThemeLabel<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeLabel::Custom(content) => content.fmt(f),
            ThemeLabel::Fallback(name) => f.write_str(name),
        }
    }
}

/// Resolves the label shown for `theme`.
///
/// The `system` override wins when the theme is `system` and system
/// preference is part of the rotation. Otherwise the override for the
/// current theme is used, falling back to the theme's name.
///
/// # Example
///
/// ```rust
/// use themeswitch::{resolve_label, Theme, ThemeChildren};
///
/// let children = ThemeChildren::new().light("Day");
/// assert_eq!(resolve_label(Theme::Light, Some(&children), false).to_string(), "Day");
/// assert_eq!(resolve_label(Theme::Dark, Some(&children), false).to_string(), "dark");
/// ```
pub fn resolve_label<C>(
    theme: Theme,
    children: Option<&ThemeChildren<C>>,
    include_system_preference: bool,
) -> ThemeLabel<'_, C> {
    let Some(children) = children else {
        return ThemeLabel::Fallback(theme.as_str());
    };

    if theme.is_system() && include_system_preference {
        if let Some(content) = &children.system {
            return ThemeLabel::Custom(content);
        }
    }

    match children.get(theme) {
        Some(content) => ThemeLabel::Custom(content),
        None => ThemeLabel::Fallback(theme.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_for_current_theme() {
        let children = ThemeChildren::new().light("Day");
        let label = resolve_label(Theme::Light, Some(&children), false);
        assert_eq!(label, ThemeLabel::Custom(&"Day"));
        assert_eq!(label.to_string(), "Day");
    }

    #[test]
    fn test_fallback_to_theme_name() {
        let children = ThemeChildren::new().light("Day");
        let label = resolve_label(Theme::Dark, Some(&children), false);
        assert!(label.is_fallback());
        assert_eq!(label.to_string(), "dark");
    }

    #[test]
    fn test_no_children_uses_names() {
        for theme in Theme::ALL {
            let label = resolve_label::<String>(theme, None, true);
            assert_eq!(label.to_string(), theme.as_str());
        }
    }

    #[test]
    fn test_system_override_with_inclusion() {
        let children = ThemeChildren::new().system("Auto".to_string());
        let label = resolve_label(Theme::System, Some(&children), true);
        assert_eq!(label.to_string(), "Auto");
    }

    #[test]
    fn test_system_without_override_falls_back() {
        let children = ThemeChildren::new().light("Day").dark("Night");
        assert_eq!(
            resolve_label(Theme::System, Some(&children), true).to_string(),
            "system"
        );
    }

    #[test]
    fn test_non_display_content() {
        #[derive(Debug, PartialEq)]
        struct Icon(u32);

        let children = ThemeChildren::new().dark(Icon(0x263E));
        assert_eq!(
            resolve_label(Theme::Dark, Some(&children), false),
            ThemeLabel::Custom(&Icon(0x263E))
        );
    }
}
