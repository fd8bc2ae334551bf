//! The theme toggle control.

use std::fmt;

use super::label::{resolve_label, ThemeChildren, ThemeLabel};
use crate::store::ThemeStore;
use crate::theme::Theme;

type ActivateCallback<E> = Box<dyn FnMut(E)>;

/// A control that shows the current theme and advances it on activation.
///
/// `C` is the label content type, `E` the activation event handed back to the
/// caller's `on_activate` callback.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ClassList, MediaQuery, Theme, ThemeChildren, ThemeStore, ThemeToggle};
///
/// let store = ThemeStore::builder()
///     .default_theme(Theme::Light)
///     .signal(MediaQuery::new(false))
///     .target(ClassList::new())
///     .build();
///
/// let mut toggle = ThemeToggle::builder(store.clone())
///     .theme_children(ThemeChildren::new().light("Day").dark("Night"))
///     .build();
///
/// assert_eq!(toggle.label().to_string(), "Day");
/// toggle.activate(());
/// assert_eq!(store.theme(), Theme::Dark);
/// assert_eq!(toggle.label().to_string(), "Night");
/// ```
pub struct ThemeToggle<C, E = ()> {
    store: ThemeStore,
    include_system_preference: bool,
    theme_children: Option<ThemeChildren<C>>,
    on_activate: Option<ActivateCallback<E>>,
}

impl<C, E> ThemeToggle<C, E> {
    /// Creates a new builder for a toggle bound to `store`.
    pub fn builder(store: ThemeStore) -> ThemeToggleBuilder<C, E> {
        ThemeToggleBuilder::new(store)
    }

    /// Returns the store's current theme.
    pub fn theme(&self) -> Theme {
        self.store.theme()
    }

    /// Returns the theme the next activation will switch to.
    pub fn next_theme(&self) -> Theme {
        self.theme().next(self.include_system_preference)
    }

    /// Resolves the label for the current theme.
    pub fn label(&self) -> ThemeLabel<'_, C> {
        resolve_label(
            self.theme(),
            self.theme_children.as_ref(),
            self.include_system_preference,
        )
    }

    /// Returns the store this control drives.
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Advances the theme, then hands `event` to the `on_activate` callback.
    ///
    /// The store (and its subscribers) see the new theme before the callback
    /// runs. Returns the new theme.
    pub fn activate(&mut self, event: E) -> Theme {
        let next = self.next_theme();
        self.store.set_theme(next);
        if let Some(on_activate) = self.on_activate.as_mut() {
            on_activate(event);
        }
        next
    }

    /// Whether a `system` label was supplied that the rotation never reaches.
    #[cfg(any(debug_assertions, test))]
    fn has_unused_system_label(&self) -> bool {
        !self.include_system_preference
            && self
                .theme_children
                .as_ref()
                .is_some_and(|children| children.system.is_some())
    }

    #[cfg(debug_assertions)]
    fn check_system_label_is_used(&self) {
        if self.has_unused_system_label() {
            tracing::warn!(
                "ThemeToggle: 'system' label provided but include_system_preference is false. \
                 The 'system' label will be ignored."
            );
        }
    }
}

impl<C: fmt::Display, E> fmt::Display for ThemeToggle<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

impl<C: fmt::Debug, E> fmt::Debug for ThemeToggle<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeToggle")
            .field("store", &self.store)
            .field("include_system_preference", &self.include_system_preference)
            .field("theme_children", &self.theme_children)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

/// Builder for [`ThemeToggle`].
pub struct ThemeToggleBuilder<C, E = ()> {
    store: ThemeStore,
    include_system_preference: bool,
    theme_children: Option<ThemeChildren<C>>,
    on_activate: Option<ActivateCallback<E>>,
}

impl<C, E> ThemeToggleBuilder<C, E> {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store,
            include_system_preference: false,
            theme_children: None,
            on_activate: None,
        }
    }

    /// Adds `system` to the rotation (`light -> dark -> system`). Off by default.
    pub fn include_system_preference(mut self, include: bool) -> Self {
        self.include_system_preference = include;
        self
    }

    /// Per-theme label overrides.
    pub fn theme_children(mut self, children: ThemeChildren<C>) -> Self {
        self.theme_children = Some(children);
        self
    }

    /// Callback run after each activation, with the activation event.
    pub fn on_activate<F>(mut self, callback: F) -> Self
    where
        F: FnMut(E) + 'static,
    {
        self.on_activate = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> ThemeToggle<C, E> {
        let toggle = ThemeToggle {
            store: self.store,
            include_system_preference: self.include_system_preference,
            theme_children: self.theme_children,
            on_activate: self.on_activate,
        };

        #[cfg(debug_assertions)]
        toggle.check_system_label_is_used();

        toggle
    }
}
