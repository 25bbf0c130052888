use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

use super::{BookStore, StoreError};

/// Book store backed by a single JSON file.
///
/// Each write goes to its own temp file in the target's directory which is
/// then renamed over the target, so a reader sees either the previous record
/// or a complete new one. Overlapping writes do not share a temp file; the
/// last rename wins. An empty file reads as absent.
#[derive(Debug, Clone)]
pub struct FileBookStore {
    path: PathBuf,
}

impl FileBookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_failure(&self, err: std::io::Error) -> StoreError {
        StoreError::WriteFailure {
            location: self.location(),
            detail: err.to_string(),
        }
    }
}

impl BookStore for FileBookStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored record");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::StorageUnavailable {
                    location: self.location(),
                    source: e,
                })
            }
        };

        let text = String::from_utf8(bytes).map_err(|e| StoreError::DeserializationFailure {
            detail: format!("record is not UTF-8: {}", e),
        })?;

        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }

    async fn put(&self, record: String) -> Result<(), StoreError> {
        let parent = self.parent_dir();
        fs::create_dir_all(&parent)
            .await
            .map_err(|e| self.write_failure(e))?;

        let target = self.path.clone();
        let written =
            tokio::task::spawn_blocking(move || write_replacing(&parent, &target, &record))
                .await
                .map_err(std::io::Error::other)
                .and_then(|result| result);

        written.map_err(|e| self.write_failure(e))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_failure(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Write `record` to a fresh temp file in `dir` and rename it onto `target`
fn write_replacing(dir: &Path, target: &Path, record: &str) -> std::io::Result<()> {
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(record.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
