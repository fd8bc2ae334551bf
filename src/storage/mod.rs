//! Persistence backends for the theme preference.
//!
//! A [`ThemeStorage`] is the equivalent of a browser's `localStorage`: a flat
//! map of string keys to string values. The store only ever touches one key.

mod error;
mod file;
mod memory;

use std::rc::Rc;

pub use error::StorageError;
pub use file::{default_store_path, FileStorage, STORE_PATH_ENV};
pub use memory::MemoryStorage;

/// String key/value persistence.
///
/// Methods take `&self`; backends that hold state use interior mutability.
pub trait ThemeStorage {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: ThemeStorage + ?Sized> ThemeStorage for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}
