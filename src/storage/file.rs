//! JSON file storage.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{StorageError, ThemeStorage};

/// Environment variable that overrides [`default_store_path`].
pub const STORE_PATH_ENV: &str = "THEMESWITCH_FILE";

const DEFAULT_STORE_FILE: &str = ".themeswitch.json";

/// Returns the file used when no explicit path is given.
///
/// Honors `THEMESWITCH_FILE`, falling back to `.themeswitch.json` in the
/// working directory.
pub fn default_store_path() -> PathBuf {
    std::env::var_os(STORE_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}

/// Storage backed by a JSON object on disk, one string entry per key.
///
/// The file is read on every access and replaced on every write, so several
/// processes see each other's changes. Writes go to a temporary file in the
/// same directory that is then renamed over the original, so readers never
/// see a partial file. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Atomically replaces the file with `contents`.
    fn replace(&self, contents: &[u8]) -> Result<(), StorageError> {
        let io_error = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(contents).map_err(io_error)?;
        file.as_file().sync_all().map_err(io_error)?;
        file.persist(&self.path).map_err(|err| io_error(err.error))?;
        Ok(())
    }
}

impl ThemeStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut items = match self.load() {
            Ok(items) => items,
            Err(StorageError::Malformed { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        items.insert(key.to_string(), value.to_string());

        let contents = serde_json::to_string_pretty(&items).map_err(|source| {
            StorageError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        self.replace(contents.as_bytes())
    }
}
