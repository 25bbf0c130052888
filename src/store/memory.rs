use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;

use super::{BookStore, StoreError};

/// In-process book store with switchable failures
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    record: Mutex<Option<String>>,
    read_delay: Option<Duration>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw record text already stored
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    /// Delay every `get` by `delay`
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = Some(delay);
        self
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl BookStore for MemoryBookStore {
    async fn get(&self) -> Result<Option<String>, StoreError> {
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::StorageUnavailable {
                location: self.location(),
                source: std::io::Error::other("reads disabled"),
            });
        }
        Ok(self.record.lock().await.clone())
    }

    async fn put(&self, record: String) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailure {
                location: self.location(),
                detail: "writes disabled".to_string(),
            });
        }
        *self.record.lock().await = Some(record);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailure {
                location: self.location(),
                detail: "writes disabled".to_string(),
            });
        }
        *self.record.lock().await = None;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_write_keeps_previous_record() {
        let store = MemoryBookStore::with_record("old");
        store.fail_writes(true);

        let err = store.put("new".to_string()).await.unwrap_err();
        assert_eq!(err.kind(), "write_failure");

        store.fail_writes(false);
        assert_eq!(store.get().await.unwrap().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_failed_read_is_not_absent() {
        let store = MemoryBookStore::new();
        store.fail_reads(true);
        assert!(store.get().await.is_err());
    }
}
