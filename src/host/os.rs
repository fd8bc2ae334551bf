//! Color-scheme signal backed by the operating system setting.

use std::cell::Cell;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::signal::{ColorSchemeSignal, ListenerId, Listeners, SchemeListener};
use crate::theme::ColorMode;

/// Function used to query the current OS color mode.
pub type ThemeDetector = fn() -> ColorMode;

/// Detects the OS light/dark setting through `dark-light`.
pub fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// A [`ColorSchemeSignal`] that follows the OS light/dark setting.
///
/// The OS does not push changes to us, so the host calls
/// [`refresh`](Self::refresh) (on focus, on a timer, ...) and listeners fire
/// when the detected mode differs from the last one seen.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ColorMode, ColorSchemeSignal, OsColorScheme};
///
/// let signal = OsColorScheme::with_detector(|| ColorMode::Dark);
/// assert!(signal.prefers_dark());
/// ```
#[derive(Debug)]
pub struct OsColorScheme {
    detector: ThemeDetector,
    prefers_dark: Cell<bool>,
    listeners: Listeners,
}

impl OsColorScheme {
    /// Creates a signal using the real OS detector.
    pub fn new() -> Self {
        Self::with_detector(os_theme_detector)
    }

    /// Creates a signal using a custom detector.
    ///
    /// This is useful for testing or when you want to force a specific color mode.
    pub fn with_detector(detector: ThemeDetector) -> Self {
        let prefers_dark = detector().is_dark();
        tracing::debug!(prefers_dark, "detected host color scheme");
        Self {
            detector,
            prefers_dark: Cell::new(prefers_dark),
            listeners: Listeners::default(),
        }
    }

    /// Re-runs the detector. Returns `true` (and notifies listeners) if the
    /// preference changed since the last detection.
    pub fn refresh(&self) -> bool {
        let prefers_dark = (self.detector)().is_dark();
        if self.prefers_dark.replace(prefers_dark) == prefers_dark {
            return false;
        }
        tracing::debug!(prefers_dark, "host color scheme changed");
        self.listeners.notify(prefers_dark);
        true
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for OsColorScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for OsColorScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn add_listener(&self, listener: SchemeListener) -> ListenerId {
        self.listeners.add(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
