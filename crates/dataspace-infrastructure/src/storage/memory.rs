// ============================================================================
// Data Space Infrastructure - In-Process Storage
// File: crates/dataspace-infrastructure/src/storage/memory.rs
// ============================================================================

use std::collections::HashMap;

use parking_lot::Mutex;

use dataspace_core::repositories::{KeyValueStorage, StorageError};

/// Process-lifetime storage; contents vanish on exit.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_value() {
        let storage = MemoryStorage::new().with_item("roles", "[]");
        storage.set_item("roles", "[{}]").unwrap();
        assert_eq!(storage.get_item("roles").unwrap().as_deref(), Some("[{}]"));
        storage.remove_item("roles").unwrap();
        assert!(storage.get_item("roles").unwrap().is_none());
        assert!(storage.is_empty());
    }
}
