//! The host's "prefers dark" color-scheme signal.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback invoked with the new `prefers_dark` value.
pub type SchemeListener = Rc<dyn Fn(bool)>;

/// Handle returned by [`ColorSchemeSignal::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A boolean "prefers dark" query with change notifications.
///
/// This is the host side of `matchMedia('(prefers-color-scheme: dark)')`.
pub trait ColorSchemeSignal {
    /// Current value of the query.
    fn prefers_dark(&self) -> bool;

    /// Registers a listener called each time the value changes.
    fn add_listener(&self, listener: SchemeListener) -> ListenerId;

    /// Removes a listener. Returns `false` if `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

impl<S: ColorSchemeSignal + ?Sized> ColorSchemeSignal for Rc<S> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn add_listener(&self, listener: SchemeListener) -> ListenerId {
        (**self).add_listener(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        (**self).remove_listener(id)
    }
}

/// Listener bookkeeping shared by the signal implementations.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: RefCell<Vec<(ListenerId, SchemeListener)>>,
    next_id: Cell<u64>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: SchemeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.entries.borrow().iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Calls every listener. The list is snapshotted first so listeners may
    /// add or remove listeners while being notified; a listener removed
    /// during dispatch is skipped, one added during dispatch waits for the
    /// next notification.
    pub(crate) fn notify(&self, prefers_dark: bool) {
        let snapshot: Vec<(ListenerId, SchemeListener)> = self
            .entries
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in snapshot {
            if self.contains(id) {
                listener(prefers_dark);
            }
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

/// A color-scheme signal driven by the application.
///
/// Useful for tests and for hosts that push preference changes themselves
/// (e.g. a settings screen or a bridged browser event).
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use themeswitch::{ColorSchemeSignal, MediaQuery};
///
/// let query = MediaQuery::new(false);
/// let seen = Rc::new(Cell::new(false));
/// let sink = Rc::clone(&seen);
/// query.add_listener(Rc::new(move |dark| sink.set(dark)));
///
/// query.set_prefers_dark(true);
/// assert!(seen.get());
/// ```
#[derive(Debug, Default)]
pub struct MediaQuery {
    prefers_dark: Cell<bool>,
    listeners: Listeners,
}

impl MediaQuery {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Cell::new(prefers_dark),
            listeners: Listeners::default(),
        }
    }

    /// Updates the value, notifying listeners only if it changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.prefers_dark.replace(prefers_dark) != prefers_dark {
            self.listeners.notify(prefers_dark);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ColorSchemeSignal for MediaQuery {
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
