//! Theme values.
//!
//! This module provides:
//!
//! - [`Theme`]: The `light`/`dark`/`system` preference and its rotation
//! - [`ColorMode`]: The concrete light or dark mode applied to the root
//! - [`ThemeConfig`]: Default theme and storage key for a store
//! - [`ParseThemeError`]: Rejected theme strings

mod config;
mod error;
mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use config::{ThemeConfig, DEFAULT_STORAGE_KEY};
pub use error::ParseThemeError;
pub use mode::ColorMode;
pub use theme::Theme;
