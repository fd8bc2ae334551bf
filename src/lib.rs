//! # Themeswitch - light, dark and system themes for UI front-ends
//!
//! Themeswitch keeps a user's theme preference (`light`, `dark` or `system`),
//! persists it, mirrors it onto a presentation root as a `light`/`dark`
//! marker and follows the host's color-scheme preference while the theme is
//! `system`. A [`ThemeToggle`] control rotates the preference on activation.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: The three-way preference, with its toggle rotation
//! - [`ThemeStore`]: Single source of truth; persists, reconciles and notifies
//! - [`ThemeToggle`]: Label plus activation for a theme button
//! - Host seams: [`ThemeStorage`], [`ColorSchemeSignal`], [`PresentationTarget`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use themeswitch::{
//!     ClassList, ColorMode, MediaQuery, MemoryStorage, Theme, ThemeChildren, ThemeStore,
//!     ThemeToggle,
//! };
//!
//! let query = Rc::new(MediaQuery::new(true));
//! let root = Rc::new(ClassList::new());
//!
//! let store = ThemeStore::builder()
//!     .default_theme(Theme::Light)
//!     .storage(MemoryStorage::new())
//!     .signal(Rc::clone(&query))
//!     .target(Rc::clone(&root))
//!     .build();
//!
//! let mut toggle = ThemeToggle::builder(store.clone())
//!     .include_system_preference(true)
//!     .theme_children(ThemeChildren::new().light("Day").dark("Night").system("Auto"))
//!     .on_activate(|_: ()| {})
//!     .build();
//!
//! toggle.activate(()); // light -> dark
//! toggle.activate(()); // dark -> system
//! assert_eq!(toggle.label().to_string(), "Auto");
//!
//! // While in `system`, host changes flow straight to the root.
//! query.set_prefers_dark(false);
//! assert_eq!(root.color_mode(), Some(ColorMode::Light));
//! ```
//!
//! ## Persistence
//!
//! The preference is stored as a plain string under one key (`"ui-theme"` by
//! default). Storage failures never reach the caller: the in-memory theme is
//! authoritative and a warning is logged through `tracing`.

pub mod host;
pub mod storage;
pub mod store;
pub mod theme;
pub mod toggle;

pub use host::{
    apply_color_mode, os_theme_detector, ClassList, ColorSchemeSignal, ListenerId, MediaQuery,
    OsColorScheme, PresentationTarget, SchemeListener, ThemeDetector,
};
pub use storage::{
    default_store_path, FileStorage, MemoryStorage, StorageError, ThemeStorage, STORE_PATH_ENV,
};
pub use store::{Subscription, ThemeState, ThemeStore, ThemeStoreBuilder};
pub use theme::{ColorMode, ParseThemeError, Theme, ThemeConfig, DEFAULT_STORAGE_KEY};
pub use toggle::{resolve_label, ThemeChildren, ThemeLabel, ThemeToggle, ThemeToggleBuilder};
