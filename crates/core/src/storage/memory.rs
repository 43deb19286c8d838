use std::collections::HashMap;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// HashMap-backed store. Used by tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `value` under `key`.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stand-in for a context with no storage at all (e.g., server-side rendering).
///
/// Reads see an empty store; writes fail with `StorageUnavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedStore;

impl KeyValueStore for DetachedStore {
    fn read(&self, _key: &str) -> Result<Option<String>, CoreError> {
        Ok(None)
    }

    fn write(&mut self, key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::StorageUnavailable(format!(
            "cannot write '{key}': no storage in this context"
        )))
    }

    fn clear(&mut self, key: &str) -> Result<(), CoreError> {
        Err(CoreError::StorageUnavailable(format!(
            "cannot clear '{key}': no storage in this context"
        )))
    }
}
