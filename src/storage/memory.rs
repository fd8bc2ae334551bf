//! In-process storage.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{StorageError, ThemeStorage};

/// A key/value store kept in memory.
///
/// Wrap it in an `Rc` to share one instance between several stores, e.g. to
/// simulate a page reload.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with one entry.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.into(), value.into());
        storage
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("ui-theme").unwrap(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::with_item("ui-theme", "light");
        storage.set_item("ui-theme", "dark").unwrap();
        assert_eq!(storage.get_item("ui-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }
}
