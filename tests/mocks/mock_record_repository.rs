use address_book::error::{StorageError, StorageResult};
use address_book::models::Record;
use address_book::repositories::RecordRepository;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock record repository for testing.
///
/// Keeps saved records in memory, tracks method calls for verification and
/// can be told to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordRepository {
    records: Arc<Mutex<Option<Vec<Record>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockRecordRepository {
    /// Create a new empty MockRecordRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let repo = Self::new();
        *repo.records.lock().unwrap() = Some(records);
        repo
    }

    /// Make every subsequent call fail with an I/O error.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Records passed to the last successful save.
    pub fn stored(&self) -> Option<Vec<Record>> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failing(&self) -> StorageResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock failure",
            )));
        }
        Ok(())
    }
}

impl RecordRepository for MockRecordRepository {
    fn load(&self) -> StorageResult<Vec<Record>> {
        self.track_call("load");
        self.check_failing()?;

        self.records.lock().unwrap().clone().ok_or_else(|| {
            StorageError::Io(io::Error::new(io::ErrorKind::NotFound, "nothing saved"))
        })
    }

    fn save(&self, records: &[Record]) -> StorageResult<()> {
        self.track_call("save");
        self.check_failing()?;

        *self.records.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }
}
