use super::document;
use super::traits::RecordRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use std::io;
use std::sync::RwLock;

/// Keeps the serialized document in memory instead of on disk.
///
/// Records go through the same encoding as [`super::JsonFileRepository`],
/// so a load returns exactly what a file round trip would.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    content: RwLock<Option<String>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved document, if any.
    pub fn contents(&self) -> StorageResult<Option<String>> {
        let guard = self.content.read().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }
}

impl RecordRepository for MemoryRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        let guard = self.content.read().map_err(|_| poisoned())?;
        match guard.as_deref() {
            Some(content) => document::decode(content.as_bytes()),
            None => Err(StorageError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "nothing has been saved yet",
            ))),
        }
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        let content = document::encode(records)?;
        let mut guard = self.content.write().map_err(|_| poisoned())?;
        *guard = Some(content);
        Ok(())
    }
}

fn poisoned() -> StorageError {
    StorageError::Io(io::Error::new(
        io::ErrorKind::Other,
        "memory repository lock poisoned",
    ))
}
