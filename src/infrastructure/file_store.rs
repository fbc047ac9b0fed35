// src/infrastructure/file_store.rs
use crate::application::KeyValueStore;
use crate::domain::DomainError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Key-value store keeping each key in `<dir>/<key>.json`.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the old value, so a crash never leaves a half-written key behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = PathBuf::from(dir.as_ref());
        debug!(?dir, "Opening file store");

        if dir.exists() && !dir.is_dir() {
            anyhow::bail!("Store path is not a directory: {}", dir.display());
        }
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory {}", dir.display()))?;

        info!(?dir, "Opened file store");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    /// Bytes that are not UTF-8 come back with replacement characters, so
    /// they fail to parse like any other malformed value.
    #[instrument(level = "trace", skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage_read(key, e)),
        }
    }

    #[instrument(level = "trace", skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut file =
            NamedTempFile::new_in(&self.dir).map_err(|e| DomainError::storage_write(key, e))?;
        file.write_all(value.as_bytes())
            .map_err(|e| DomainError::storage_write(key, e))?;
        file.persist(self.path_for(key))
            .map_err(|e| DomainError::storage_write(key, e.error))?;
        Ok(())
    }
}
