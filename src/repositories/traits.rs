use crate::error::StorageResult;
use crate::models::Record;

/// Repository for persisting address book records.
///
/// Provides abstraction over where a book is saved, enabling different
/// implementations (JSON file, in-memory, mock).
pub trait RecordRepository: Send + Sync {
    /// Load every stored record, in stored order.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Replace the stored records with `records`.
    fn save(&self, records: &[Record]) -> StorageResult<()>;
}
