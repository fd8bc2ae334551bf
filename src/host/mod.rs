//! Host environment seams.
//!
//! This module provides:
//!
//! - [`ColorSchemeSignal`]: The host's "prefers dark" query with listeners
//! - [`MediaQuery`]: An application-driven signal
//! - [`OsColorScheme`]: A signal following the OS setting via `dark-light`
//! - [`PresentationTarget`]: The root that carries the `light`/`dark` marker
//! - [`ClassList`]: An in-memory presentation root

mod os;
mod signal;
mod target;

pub use os::{os_theme_detector, OsColorScheme, ThemeDetector};
pub use signal::{ColorSchemeSignal, ListenerId, MediaQuery, SchemeListener};
pub use target::{apply_color_mode, ClassList, PresentationTarget};
