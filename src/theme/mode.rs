//! Concrete presentation modes.

use std::fmt;

/// The concrete color mode applied to the presentation root.
///
/// Unlike [`Theme`](super::Theme) there is no `System` variant: a mode is
/// always something that can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Both markers, in the order they are cleared from the root.
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// The marker (class name) used on the presentation root.
    pub fn marker(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefers_dark() {
        assert_eq!(ColorMode::from_prefers_dark(true), ColorMode::Dark);
        assert_eq!(ColorMode::from_prefers_dark(false), ColorMode::Light);
    }

    #[test]
    fn test_markers() {
        assert_eq!(ColorMode::Light.marker(), "light");
        assert_eq!(ColorMode::Dark.to_string(), "dark");
    }
}
