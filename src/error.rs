use thiserror::Error;

use crate::domain::{CardId, ColumnId};

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("Card text is empty")]
    EmptyCardText,

    #[error("Card text is {len} characters long, the limit is {max}")]
    CardTextTooLong { len: usize, max: usize },

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("A drag is in progress")]
    DragInProgress,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
