use crate::storage::errors::StorageError;
use crate::storage::Storage;
use dashmap::DashMap;
use std::sync::Arc;

/// Volatile key-value slots, shared between clones.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<DashMap<String, String>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(DashMap::new())
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|value| value.value().clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
