use crate::storage::errors::StorageError;
use crate::storage::Storage;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Key-value slots kept as one JSON file per key inside a directory.
pub struct FileStorage {
    directory: PathBuf
}

impl FileStorage {
    /// Opens (creating if needed) the directory that holds the slots.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;

        Ok(Self { directory })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);

        if !is_valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into())
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        //NOTE: The new blob is written beside the old one and renamed over it, so readers only ever
        //      observe the previous value or the complete new one.
        let mut file = NamedTempFile::new_in(&self.directory)?;
        file.write_all(value.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|error| error.error)?;

        Ok(())
    }
}
