use super::document;
use super::traits::RecordRepository;
use crate::error::StorageResult;
use crate::models::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name used when no path is configured.
pub const DEFAULT_BOOK_FILE: &str = "Phone_Book";

/// Stores records as a versioned JSON document in a single file.
///
/// Saving overwrites the whole file. There is no locking, so concurrent
/// writers to the same path race.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_FILE)
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        debug!("Reading address book from {}", self.path.display());
        let content = fs::read(&self.path)?;
        let records = document::decode(&content)?;
        info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let content = document::encode(records)?;
        fs::write(&self.path, content)?;
        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
