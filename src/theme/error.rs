//! Theme parsing errors.

use thiserror::Error;

/// Error returned when a string is not one of `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme '{value}', expected one of: light, dark, system")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}
