/// Core error types for TubeDeck
use crate::types::VideoId;
use thiserror::Error;

/// Result type alias using `DeckError`
pub type Result<T> = std::result::Result<T, DeckError>;

/// Core error type for TubeDeck
#[derive(Error, Debug)]
pub enum DeckError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Video already exists in one of the user's playlists
    #[error("Video already exists in a playlist: {0}")]
    DuplicateVideo(VideoId),

    /// Name already taken (usernames; playlist names are not unique)
    #[error("Name already taken: {0}")]
    DuplicateName(String),

    /// Invalid input (empty required field, out-of-range rating, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Queue operation on an empty queue
    #[error("Queue is empty")]
    QueueEmpty,

    /// Durable state could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl DeckError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
