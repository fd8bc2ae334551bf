//! The theme toggle control.
//!
//! This module provides:
//!
//! - [`ThemeToggle`]: Renders a label and rotates the store's theme on activation
//! - [`ThemeToggleBuilder`]: Configures rotation, labels and the activation callback
//! - [`ThemeChildren`]: Per-theme label overrides
//! - [`resolve_label`]: Label resolution as a pure function

mod label;
#[allow(clippy::module_inception)]
mod toggle;

pub use label::{resolve_label, ThemeChildren, ThemeLabel};
pub use toggle::{ThemeToggle, ThemeToggleBuilder};
