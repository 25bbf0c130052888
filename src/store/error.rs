use thiserror::Error;

/// Failures a book store can report.
///
/// "Nothing stored" is not an error: stores return `Ok(None)` for it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying storage could not be reached or read
    #[error("storage unavailable at '{location}': {source}")]
    StorageUnavailable {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes were present but do not form a valid record
    #[error("stored record is not a valid book: {detail}")]
    DeserializationFailure { detail: String },

    /// A write could not be durably requested
    #[error("failed to write record to '{location}': {detail}")]
    WriteFailure { location: String, detail: String },
}

impl StoreError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::StorageUnavailable { .. } => "storage_unavailable",
            StoreError::DeserializationFailure { .. } => "deserialization_failure",
            StoreError::WriteFailure { .. } => "write_failure",
        }
    }
}
