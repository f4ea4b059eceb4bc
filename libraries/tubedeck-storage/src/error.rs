/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Durable record could not be written
    #[error("Write failed for {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Durable record could not be read
    #[error("Read failed for {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for tubedeck_core::DeckError {
    fn from(err: StorageError) -> Self {
        tubedeck_core::DeckError::persistence(err.to_string())
    }
}
