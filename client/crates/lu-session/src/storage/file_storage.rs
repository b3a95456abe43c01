use crate::storage::{
    ClientStorage, check_key,
    error::{Result as StorageResult, StorageError},
};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// Directory-backed storage: one file per key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::dir_creation(dir.clone(), e))?;
        debug!("Opened client storage at {dir:?}");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        check_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    ///
    /// A crash mid-write leaves either the old value or the new one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;
        let temp_path = self
            .dir
            .join(format!("{key}.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Stored '{key}' ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed '{key}'");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::remove(path, e)),
        }
    }
}
