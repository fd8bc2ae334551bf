//! Builder for [`ThemeStore`].

use std::rc::Rc;

use super::store::ThemeStore;
use crate::host::{ClassList, ColorSchemeSignal, OsColorScheme, PresentationTarget};
use crate::storage::{MemoryStorage, ThemeStorage};
use crate::theme::{Theme, ThemeConfig};

/// Builder for constructing a [`ThemeStore`].
///
/// Unset seams fall back to an in-memory storage, the OS color-scheme signal
/// and a private [`ClassList`].
///
/// # Example
///
/// ```rust
/// use themeswitch::{ClassList, MediaQuery, MemoryStorage, Theme, ThemeStore};
///
/// let store = ThemeStore::builder()
///     .default_theme(Theme::Dark)
///     .storage_key("app.theme")
///     .storage(MemoryStorage::new())
///     .signal(MediaQuery::new(false))
///     .target(ClassList::new())
///     .build();
///
/// assert_eq!(store.theme(), Theme::Dark);
/// assert_eq!(store.storage_key(), "app.theme");
/// ```
#[derive(Default)]
pub struct ThemeStoreBuilder {
    config: ThemeConfig,
    storage: Option<Rc<dyn ThemeStorage>>,
    signal: Option<Rc<dyn ColorSchemeSignal>>,
    target: Option<Rc<dyn PresentationTarget>>,
}

impl ThemeStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    /// Theme used when nothing valid is persisted. Defaults to `system`.
    pub fn default_theme(mut self, theme: Theme) -> Self {
        self.config.default_theme = theme;
        self
    }

    /// Key the preference is persisted under. Defaults to `"ui-theme"`.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn storage<S: ThemeStorage + 'static>(mut self, storage: S) -> Self {
        self.storage = Some(Rc::new(storage));
        self
    }

    pub fn signal<S: ColorSchemeSignal + 'static>(mut self, signal: S) -> Self {
        self.signal = Some(Rc::new(signal));
        self
    }

    pub fn target<T: PresentationTarget + 'static>(mut self, target: T) -> Self {
        self.target = Some(Rc::new(target));
        self
    }

    /// Initializes the store.
    pub fn build(self) -> ThemeStore {
        let storage = self
            .storage
            .unwrap_or_else(|| Rc::new(MemoryStorage::new()));
        let signal = self
            .signal
            .unwrap_or_else(|| Rc::new(OsColorScheme::new()));
        let target = self.target.unwrap_or_else(|| Rc::new(ClassList::new()));

        ThemeStore::new(self.config, storage, signal, target)
    }
}
