mod document;
mod json_file_repository;
mod memory_repository;
mod traits;

pub use document::FORMAT_VERSION;
pub use json_file_repository::{JsonFileRepository, DEFAULT_BOOK_FILE};
pub use memory_repository::MemoryRepository;
pub use traits::RecordRepository;
