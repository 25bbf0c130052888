//! Durable storage for the single "last added book" record

mod error;
mod file;
#[cfg(test)]
mod memory;

use std::future::Future;

use chrono::Utc;
use tracing::debug;

use crate::book::{self, CurrentBook, StoredRecord};

pub use error::StoreError;
pub use file::FileBookStore;
#[cfg(test)]
pub use memory::MemoryBookStore;

/// Key the record lives under
pub const LAST_ADDED_BOOK_KEY: &str = "lastAddedBook";

/// Key-value storage holding at most one serialized book record.
///
/// `put` overwrites unconditionally; the last write to complete wins.
pub trait BookStore: Send + Sync + 'static {
    /// Read the stored record, `Ok(None)` when nothing has been written
    fn get(&self) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Replace the stored record
    fn put(&self, record: String) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Remove the stored record, if any
    fn clear(&self) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Human-readable location, used in diagnostics
    fn location(&self) -> String;
}

/// Encode a book and write it to the store
pub async fn save_book<S: BookStore>(store: &S, book: &CurrentBook) -> Result<(), StoreError> {
    let raw = book::encode(book, Utc::now())?;
    store.put(raw).await?;
    debug!(id = %book.id, location = %store.location(), "stored book record");
    Ok(())
}

/// Read and decode the stored book
pub async fn load_book<S: BookStore>(store: &S) -> Result<Option<StoredRecord>, StoreError> {
    match store.get().await? {
        Some(raw) => book::decode(&raw).map(Some),
        None => Ok(None),
    }
}
