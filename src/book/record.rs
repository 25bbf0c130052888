//! Serialized form of [`CurrentBook`] as it sits in the book store.
//!
//! Records are wrapped in a versioned envelope:
//!
//! ```json
//! {"schema_version": 1, "saved_at": "2026-01-01T00:00:00Z", "book": {...}}
//! ```
//!
//! A bare book object with no envelope is the pre-versioning layout and is
//! read as schema 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::book::CurrentBook;
use crate::store::StoreError;

/// Newest envelope version this build writes and understands
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    book: &'a CurrentBook,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredShape {
    Versioned {
        schema_version: u32,
        #[serde(default)]
        saved_at: Option<DateTime<Utc>>,
        book: CurrentBook,
    },
    Legacy(CurrentBook),
}

/// A decoded record plus the envelope details it came with
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub schema_version: u32,
    pub saved_at: Option<DateTime<Utc>>,
    pub book: CurrentBook,
}

/// Serialize a book into the current envelope
pub fn encode(book: &CurrentBook, saved_at: DateTime<Utc>) -> Result<String, StoreError> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        saved_at,
        book,
    };
    serde_json::to_string(&envelope).map_err(|e| StoreError::WriteFailure {
        location: "record encoder".to_string(),
        detail: e.to_string(),
    })
}

/// Parse stored text back into a book
pub fn decode(raw: &str) -> Result<StoredRecord, StoreError> {
    let shape: StoredShape =
        serde_json::from_str(raw).map_err(|e| StoreError::DeserializationFailure {
            detail: e.to_string(),
        })?;

    let record = match shape {
        StoredShape::Versioned {
            schema_version,
            saved_at,
            book,
        } => StoredRecord {
            schema_version,
            saved_at,
            book,
        },
        StoredShape::Legacy(book) => StoredRecord {
            schema_version: 0,
            saved_at: None,
            book,
        },
    };

    if record.schema_version > SCHEMA_VERSION {
        return Err(StoreError::DeserializationFailure {
            detail: format!(
                "schema version {} is newer than supported version {}",
                record.schema_version, SCHEMA_VERSION
            ),
        });
    }

    for (field, value) in [("id", &record.book.id), ("title", &record.book.title)] {
        if value.trim().is_empty() {
            return Err(StoreError::DeserializationFailure {
                detail: format!("book {} is empty", field),
            });
        }
    }

    Ok(record)
}
