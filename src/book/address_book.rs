//! Name-keyed store of contact records.

use super::pages::Pages;
use super::search::{self, SearchOutcome};
use crate::error::StorageResult;
use crate::models::Record;
use crate::repositories::{JsonFileRepository, RecordRepository};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::{debug, info, warn};

/// An in-memory address book mapping contact names to records.
///
/// Records keep insertion order. Adding a record under an existing name
/// replaces the stored record in its original position.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record, SearchOutcome};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// assert!(book.find("John").is_some());
/// assert_eq!(book.search("123"), SearchOutcome::Found(vec!["John".to_string()]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                warn!("Replacing existing contact: {}", record.name());
                self.records[index] = record;
            }
            None => {
                debug!("Adding contact: {}", record.name());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Find a record for in-place editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!("Deleting contact: {}", name);
        Some(self.records.remove(index))
    }

    /// Search names and phones for `term`. See [`SearchOutcome`].
    pub fn search(&self, term: &str) -> SearchOutcome {
        let outcome = search::search(&self.records, term);
        debug!("Search for {:?} returned {} names", term, outcome.names().len());
        outcome
    }

    /// Rendered pages of up to `page_size` records, dated today.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        self.pages_on(page_size, Local::now().date_naive())
    }

    /// Rendered pages of up to `page_size` records, dated `today`.
    pub fn pages_on(&self, page_size: usize, today: NaiveDate) -> Pages<'_> {
        Pages::new(&self.records, page_size, today)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record to `path`, overwriting the file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.save_to(&JsonFileRepository::new(path.as_ref()))
    }

    /// Replace the book's contents with the records stored at `path`.
    ///
    /// On error the book is left unchanged.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.load_from(&JsonFileRepository::new(path.as_ref()))
    }

    pub fn save_to(&self, repository: &dyn RecordRepository) -> StorageResult<()> {
        repository.save(&self.records)
    }

    /// Replace the book's contents with the repository's records.
    ///
    /// On error the book is left unchanged.
    pub fn load_from(&mut self, repository: &dyn RecordRepository) -> StorageResult<()> {
        let loaded = repository.load()?;
        let mut book = AddressBook::new();
        for record in loaded {
            book.add_record(record);
        }
        info!("Address book now holds {} contacts", book.len());
        *self = book;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
