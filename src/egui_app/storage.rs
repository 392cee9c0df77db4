//! Session storage
//!
//! Key/value storage holding the signed-in user between launches, in the
//! spirit of a browser tab's session storage.

use crate::shared::error::ClientError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Storage key of the serialized current user
pub const SESSION_KEY: &str = "currentUser";

pub trait SessionStorage: Send {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ClientError>;
}

/// Lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        self.items.remove(key);
        Ok(())
    }
}

/// JSON object on disk, rewritten on every change
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: HashMap<String, String>,
}

impl FileStorage {
    /// Open (or lazily create) the store at `path`. An unreadable file starts
    /// empty rather than failing sign-in.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable session file {:?}: {}", path, e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, items }
    }

    /// `<local data dir>/receipt-manager/session.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("receipt-manager").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::storage(format!("{}: {}", parent.display(), e)))?;
        }
        let contents = serde_json::to_string(&self.items)?;
        std::fs::write(&self.path, contents)
            .map_err(|e| ClientError::storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), ClientError> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
