//! Key-value storage for session and preference slots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use super::error::SessionError;

/// String key-value storage with get/set/delete.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), SessionError>;
}

/// Process-local storage; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object in a file.
///
/// The whole file is read at startup and rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file starts empty; an unreadable or corrupt file is an
    /// error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let map = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| SessionError::Json {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(SessionError::Io {
                    message: format!("failed to read {}: {}", path.display(), e),
                });
            }
        };

        Ok(Self {
            path,
            inner: RwLock::new(map),
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, map: &HashMap<String, String>) -> Result<(), SessionError> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
                message: format!("failed to create state directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(map).map_err(|e| SessionError::Json {
            message: format!("failed to serialize state: {}", e),
        })?;

        std::fs::write(&self.path, json).map_err(|e| SessionError::Io {
            message: format!("failed to write state file: {}", e),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SessionError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !guard.contains_key(key) {
            return Ok(());
        }
        // Memory only changes once the file does
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}
