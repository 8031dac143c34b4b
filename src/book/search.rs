//! Substring search over names and phones.

use crate::models::Record;
use std::fmt;

/// Shortest search term accepted, in characters.
pub const MIN_SEARCH_LEN: usize = 3;

/// Result of [`super::AddressBook::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was shorter than [`MIN_SEARCH_LEN`].
    TooShort,

    /// Nothing matched.
    NoMatches,

    /// Names of matching records, one entry per match.
    ///
    /// A record is listed once for a name match and once more for every
    /// matching phone, so names can repeat.
    Found(Vec<String>),
}

impl SearchOutcome {
    /// Matched names, or an empty slice for the informational outcomes.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Found(names) => names,
            Self::TooShort | Self::NoMatches => &[],
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(
                f,
                "To search by name you need at least {0} letters or {0} numbers to search by phone number",
                MIN_SEARCH_LEN
            ),
            Self::NoMatches => write!(f, "No matches found"),
            Self::Found(names) => write!(f, "{}", names.join(", ")),
        }
    }
}

/// Scan `records` for `term` in names and phones.
pub(crate) fn search<'a>(records: impl IntoIterator<Item = &'a Record>, term: &str) -> SearchOutcome {
    if term.chars().count() < MIN_SEARCH_LEN {
        return SearchOutcome::TooShort;
    }

    let mut matches = Vec::new();
    for record in records {
        let name = record.name().as_str();
        if name.contains(term) {
            matches.push(name.to_string());
        }
        for phone in record.phones() {
            if phone.as_str().contains(term) {
                matches.push(name.to_string());
            }
        }
    }

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Found(matches)
    }
}
