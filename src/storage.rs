use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// String key/value store with local-storage semantics: synchronous,
/// last write wins.
pub trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// Every key lives in one JSON object on disk, rewritten on each change.
pub struct FileStorage {
    items: BTreeMap<String, String>,
    path: PathBuf,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match Self::read_file(&path) {
            Ok(items) => items,
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No storage file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable storage {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { items, path }
    }

    fn read_file(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_file(&self) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.write_file() {
            log::error!("Failed to save storage to {}: {}", self.path.display(), e);
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}
