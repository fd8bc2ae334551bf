//! The theme store ("provider").
//!
//! This module provides:
//!
//! - [`ThemeStore`]: Owns the active theme, persists it and reconciles it with the host
//! - [`ThemeStoreBuilder`]: Fluent construction with defaults for every seam
//! - [`ThemeState`]: Snapshot of the store's state
//! - [`Subscription`]: Disposer for a store listener

mod builder;
#[allow(clippy::module_inception)]
mod store;
mod subscription;

pub use builder::ThemeStoreBuilder;
pub use store::{ThemeState, ThemeStore};
pub use subscription::Subscription;
