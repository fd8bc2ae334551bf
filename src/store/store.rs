//! The theme store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::builder::ThemeStoreBuilder;
use super::subscription::{Subscription, ThemeListener};
use crate::host::{apply_color_mode, ColorSchemeSignal, ListenerId, PresentationTarget};
use crate::storage::ThemeStorage;
use crate::theme::{ColorMode, ParseThemeError, Theme, ThemeConfig};

/// Snapshot of a store's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

/// Single source of truth for the active theme.
///
/// A `ThemeStore` is a cheap handle: clones share the same state, so hand a
/// clone to every consumer that needs to read or change the theme. The store
/// is torn down (host listener removed) when the last handle is dropped.
///
/// While the theme is [`Theme::System`] the store listens to the host's
/// color-scheme signal and mirrors it onto the presentation target. For
/// `Light` and `Dark` it applies the marker directly and does not listen.
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use themeswitch::{ClassList, ColorMode, MediaQuery, MemoryStorage, Theme, ThemeStore};
///
/// let root = Rc::new(ClassList::new());
/// let store = ThemeStore::builder()
///     .default_theme(Theme::Light)
///     .storage(MemoryStorage::new())
///     .signal(MediaQuery::new(true))
///     .target(Rc::clone(&root))
///     .build();
///
/// assert_eq!(root.color_mode(), Some(ColorMode::Light));
///
/// store.set_theme(Theme::System);
/// assert_eq!(root.color_mode(), Some(ColorMode::Dark));
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    pub(crate) inner: Rc<StoreInner>,
}

pub(crate) struct StoreInner {
    theme: Cell<Theme>,
    storage_key: String,
    storage: Rc<dyn ThemeStorage>,
    signal: Rc<dyn ColorSchemeSignal>,
    target: Rc<dyn PresentationTarget>,
    subscribers: RefCell<Vec<(u64, ThemeListener)>>,
    next_subscriber: Cell<u64>,
    system_listener: Cell<Option<ListenerId>>,
    /// Bumped by every `set_theme`; a notification pass stops once it is stale.
    generation: Cell<u64>,
}

impl ThemeStore {
    /// Creates a new builder with the default configuration.
    pub fn builder() -> ThemeStoreBuilder {
        ThemeStoreBuilder::new()
    }

    /// Initializes a store from persisted storage or `config.default_theme`.
    ///
    /// Never fails: an unreadable storage or an unrecognized persisted value
    /// falls back to the default. The initial presentation is applied before
    /// returning.
    pub fn new(
        config: ThemeConfig,
        storage: Rc<dyn ThemeStorage>,
        signal: Rc<dyn ColorSchemeSignal>,
        target: Rc<dyn PresentationTarget>,
    ) -> Self {
        let theme = load_theme(&*storage, &config);
        tracing::debug!(%theme, key = %config.storage_key, "initialized theme store");

        let inner = Rc::new(StoreInner {
            theme: Cell::new(theme),
            storage_key: config.storage_key,
            storage,
            signal,
            target,
            subscribers: RefCell::new(Vec::new()),
            next_subscriber: Cell::new(0),
            system_listener: Cell::new(None),
            generation: Cell::new(0),
        });
        inner.reconcile();

        Self { inner }
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.inner.theme.get()
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            theme: self.theme(),
        }
    }

    /// Returns the color mode currently applied to the presentation target.
    pub fn color_mode(&self) -> ColorMode {
        self.theme().resolve(self.inner.signal.prefers_dark())
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.storage_key
    }

    /// Sets the theme.
    ///
    /// Persists the value (a failed write is logged and ignored), updates the
    /// in-memory state, reconciles the presentation target and then calls
    /// every subscriber before returning.
    ///
    /// A subscriber may call `set_theme` again; the remaining subscribers of
    /// the outer call are then skipped, since the nested call has already
    /// delivered the newer theme to everyone.
    pub fn set_theme(&self, theme: Theme) {
        let inner = &self.inner;

        if let Err(err) = inner.storage.set_item(&inner.storage_key, theme.as_str()) {
            tracing::warn!(
                key = %inner.storage_key,
                error = %err,
                "failed to persist theme, keeping in-memory value"
            );
        }

        let previous = inner.theme.replace(theme);
        let generation = inner.generation.get() + 1;
        inner.generation.set(generation);
        tracing::debug!(from = %previous, to = %theme, "theme set");

        inner.reconcile();
        inner.notify(theme, generation);
    }

    /// Parses and sets a theme given by name.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the store untouched, if `name` is not one of
    /// `light`, `dark` or `system`.
    pub fn set_theme_str(&self, name: &str) -> Result<(), ParseThemeError> {
        let theme = name.parse()?;
        self.set_theme(theme);
        Ok(())
    }

    /// Registers a listener called with the new theme on every [`set_theme`](Self::set_theme).
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or [`unsubscribed`](Subscription::unsubscribe).
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Theme) + 'static,
    {
        let inner = &self.inner;
        let id = inner.next_subscriber.get();
        inner.next_subscriber.set(id + 1);
        inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription::new(Rc::downgrade(inner), id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Whether the store is currently listening to the host signal.
    pub fn is_tracking_system(&self) -> bool {
        self.inner.system_listener.get().is_some()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme())
            .field("storage_key", &self.inner.storage_key)
            .field("subscribers", &self.subscriber_count())
            .field("tracking_system", &self.is_tracking_system())
            .finish()
    }
}

impl StoreInner {
    /// Brings the host listener and the presentation target in line with the
    /// current theme.
    fn reconcile(self: &Rc<Self>) {
        let theme = self.theme.get();

        if theme.is_system() {
            if self.system_listener.get().is_none() {
                let store: Weak<StoreInner> = Rc::downgrade(self);
                let id = self.signal.add_listener(Rc::new(move |prefers_dark| {
                    let Some(store) = store.upgrade() else {
                        return;
                    };
                    if !store.theme.get().is_system() {
                        return;
                    }
                    let mode = ColorMode::from_prefers_dark(prefers_dark);
                    tracing::debug!(%mode, "host color scheme changed");
                    apply_color_mode(&*store.target, mode);
                }));
                self.system_listener.set(Some(id));
                tracing::debug!("tracking host color scheme");
            }
        } else {
            self.detach_system_listener();
        }

        let mode = theme.resolve(self.signal.prefers_dark());
        apply_color_mode(&*self.target, mode);
    }

    fn detach_system_listener(&self) {
        if let Some(id) = self.system_listener.take() {
            self.signal.remove_listener(id);
            tracing::debug!("stopped tracking host color scheme");
        }
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers
            .borrow()
            .iter()
            .any(|(subscriber, _)| *subscriber == id)
    }

    /// Calls the subscribers registered when the pass starts, skipping any
    /// unsubscribed meanwhile and stopping if a nested `set_theme` ran.
    fn notify(&self, theme: Theme, generation: u64) {
        let snapshot: Vec<(u64, ThemeListener)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in snapshot {
            if self.generation.get() != generation {
                break;
            }
            if self.is_subscribed(id) {
                listener(theme);
            }
        }
    }

    pub(crate) fn unsubscribe(&self, id: u64) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscriber, _)| *subscriber != id);
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        self.detach_system_listener();
    }
}

fn load_theme(storage: &dyn ThemeStorage, config: &ThemeConfig) -> Theme {
    match storage.get_item(&config.storage_key) {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => theme,
            Err(err) => {
                tracing::debug!(
                    key = %config.storage_key,
                    error = %err,
                    "ignoring persisted theme"
                );
                config.default_theme
            }
        },
        Ok(None) => config.default_theme,
        Err(err) => {
            tracing::warn!(
                key = %config.storage_key,
                error = %err,
                "failed to read persisted theme, using default"
            );
            config.default_theme
        }
    }
}
