use anyhow::{Context, Result};
use notecards::app::NotesApp;
use notecards::infrastructure::FileStore;
use notecards::util::testing::SequentialIds;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a file store in a temporary directory
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let store_dir = temp_dir.path().join("store");

        Ok(Self {
            _temp_dir: temp_dir,
            store_dir,
        })
    }

    /// Open a fresh handle on the store directory
    pub fn open(&self) -> Result<FileStore> {
        FileStore::open(&self.store_dir)
    }

    /// Write a raw value as if an earlier session had stored it
    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.store_dir)?;
        std::fs::write(self.store_dir.join(format!("{key}.json")), value)
            .context("Failed to write raw store value")
    }

    /// Write raw bytes, which need not be valid UTF-8
    pub fn write_raw_bytes(&self, key: &str, value: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.store_dir)?;
        std::fs::write(self.store_dir.join(format!("{key}.json")), value)
            .context("Failed to write raw store bytes")
    }

    pub fn read_raw(&self, key: &str) -> Result<String> {
        std::fs::read_to_string(self.store_dir.join(format!("{key}.json")))
            .context("Failed to read raw store value")
    }

    /// Start the app against this store, as a new process would
    pub fn start_app(&self, prefix: &str) -> Result<NotesApp<FileStore, SequentialIds>> {
        Ok(NotesApp::new(self.open()?, SequentialIds::new(prefix), "Tester")?)
    }
}

/// Seed titles in display order
#[allow(dead_code)]
pub const SEED_TITLES: [&str; 3] = ["Test note 1", "Shopping list", "Job interview"];
