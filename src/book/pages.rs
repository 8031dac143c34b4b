//! Lazy page-by-page rendering of an address book.

use crate::models::Record;
use chrono::NaiveDate;

/// Iterator over rendered pages of records.
///
/// Every full page is yielded, followed by one final page holding the
/// remaining records. When the record count is a multiple of the page size
/// that final page is empty, so a book of `n` records always produces
/// `n / page_size + 1` pages.
#[derive(Debug)]
pub struct Pages<'a> {
    records: &'a [Record],
    page_size: usize,
    today: NaiveDate,
    next: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    /// A page size of zero is treated as one.
    pub(crate) fn new(records: &'a [Record], page_size: usize, today: NaiveDate) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
            today,
            next: 0,
            done: false,
        }
    }

    fn render(&self, records: &[Record]) -> String {
        records
            .iter()
            .map(|record| format!("{}\n", record.render_on(self.today)))
            .collect()
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let end = (self.next + self.page_size).min(self.records.len());
        let page = self.render(&self.records[self.next..end]);
        if end - self.next < self.page_size {
            self.done = true;
        }
        self.next = end;
        Some(page)
    }
}
