//! Store subscriptions.

use std::fmt;
use std::rc::{Rc, Weak};

use super::store::StoreInner;
use crate::theme::Theme;

/// Callback invoked with the new theme.
pub(crate) type ThemeListener = Rc<dyn Fn(Theme)>;

/// Disposer returned by [`ThemeStore::subscribe`](crate::ThemeStore::subscribe).
///
/// The listener is removed when this value is dropped. Holding a subscription
/// does not keep the store alive.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: Option<u64>,
}

impl Subscription {
    pub(crate) fn new(store: Weak<StoreInner>, id: u64) -> Self {
        Self {
            store,
            id: Some(id),
        }
    }

    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.dispose();
    }

    /// Whether the listener is still registered with a live store.
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.store.strong_count() > 0
    }

    fn dispose(&mut self) {
        if let (Some(id), Some(store)) = (self.id.take(), self.store.upgrade()) {
            store.unsubscribe(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
