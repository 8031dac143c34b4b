//! The address book container and the views it produces.

mod address_book;
mod pages;
mod search;

pub use address_book::AddressBook;
pub use pages::Pages;
pub use search::{SearchOutcome, MIN_SEARCH_LEN};
