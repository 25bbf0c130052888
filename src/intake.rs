//! Adding a book: validate the draft, assign an id, write it to the store

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::book::CurrentBook;
use crate::store::{self, BookStore};

/// What the user filled in on the Add Book screen
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub id: Option<String>,
    pub title: String,
    pub author: Option<String>,
    pub duration_seconds: Option<u64>,
    pub file_uri: Option<String>,
    pub cover_uri: Option<String>,
}

impl BookDraft {
    /// Validate and turn the draft into a book
    pub fn into_book(self, now: DateTime<Utc>) -> Result<CurrentBook> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            bail!("Book title must not be empty");
        }

        let id = match self.id.map(|id| id.trim().to_string()) {
            Some(id) if id.is_empty() => bail!("Book id must not be empty"),
            Some(id) => id,
            None => derive_id(&title, self.file_uri.as_deref(), now),
        };

        Ok(CurrentBook {
            author: non_blank(self.author),
            duration_seconds: self.duration_seconds,
            file_uri: non_blank(self.file_uri),
            cover_uri: non_blank(self.cover_uri),
            ..CurrentBook::new(id, title)
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 16 hex chars from the title, file and time of adding
fn derive_id(title: &str, file_uri: Option<&str>, now: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update([0]);
    hasher.update(file_uri.unwrap_or_default().as_bytes());
    hasher.update([0]);
    hasher.update(now.to_rfc3339().as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

/// Validate a draft and store it as the last added book.
///
/// Returns only once the store has accepted the write.
pub async fn add_book<S: BookStore>(store: &S, draft: BookDraft) -> Result<CurrentBook> {
    let book = draft.into_book(Utc::now())?;
    store::save_book(store, &book)
        .await
        .with_context(|| format!("Failed to save \"{}\"", book.title))?;
    Ok(book)
}
