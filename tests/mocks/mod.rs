//! Mock implementations for testing.

pub mod mock_record_repository;

#[allow(unused_imports)]
pub use mock_record_repository::MockRecordRepository;
