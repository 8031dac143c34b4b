//! Versioned on-disk document shared by the repositories.
//!
//! ```json
//! {"version":1,"records":[{"name":"John","phones":["1234567890"],"birthday":"1990.12.01"}]}
//! ```

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookDocumentRef<'a> {
    version: u32,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct BookDocument {
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

/// Serialize records into a document.
pub(crate) fn encode(records: &[Record]) -> StorageResult<String> {
    let document = BookDocumentRef {
        version: FORMAT_VERSION,
        records,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a document, checking its version before its records.
pub(crate) fn decode(content: &[u8]) -> StorageResult<Vec<Record>> {
    let probe: VersionProbe = serde_json::from_slice(content)?;
    if probe.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: probe.version,
            expected: FORMAT_VERSION,
        });
    }
    let document: BookDocument = serde_json::from_slice(content)?;
    Ok(document.records)
}
