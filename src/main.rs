//! Address Book - demo driver
//!
//! Builds a small book, prints it, exercises search and phone editing, lists
//! it page by page and saves it to the configured file.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SEPARATOR_WIDTH: usize = 24;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout only carries the listing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = AddressBook::new();
    book.add_record(contact("John", &["1234567890", "5555555555"], Some("2022.11.01"))?);
    book.add_record(contact("Jane", &["9876543210"], None)?);
    book.add_record(contact("John1", &["1234567890", "5555555555"], Some("1992.01.01"))?);
    book.add_record(contact("John2", &["1234567890", "5555555555"], Some("1990.12.01"))?);

    for record in book.records() {
        println!("{}", record);
    }
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    println!("{}", book.search("123"));
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
        if let Some(phone) = john.find_phone("5555555555") {
            info!("{}: {}", john.name(), phone);
        }
    }

    for page in book.pages(config.page_size).take(3) {
        println!("{}", page);
    }

    if let Err(e) = book.save_to_file(&config.book_file) {
        error!("Failed to save address book: {}", e);
        return Err(e)
            .with_context(|| format!("saving to {}", config.book_file.display()));
    }

    info!("Address book demo complete");
    Ok(())
}

fn contact(name: &str, phones: &[&str], birthday: Option<&str>) -> Result<Record> {
    let mut record = Record::new(name)?;
    for phone in phones {
        record.add_phone(phone)?;
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday)?;
    }
    Ok(record)
}
