mod errors;
mod file_storage;
mod memory_storage;
mod record_store;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use record_store::RecordStore;

/// A persistent key-value collaborator holding one string blob per key.
pub trait Storage: Send + Sync + 'static {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
