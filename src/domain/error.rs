// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Failed to read '{key}' from store: {message}")]
    StorageRead { key: String, message: String },
    #[error("Failed to write '{key}' to store: {message}")]
    StorageWrite { key: String, message: String },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    pub fn storage_read(key: impl Into<String>, message: impl ToString) -> Self {
        DomainError::StorageRead {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn storage_write(key: impl Into<String>, message: impl ToString) -> Self {
        DomainError::StorageWrite {
            key: key.into(),
            message: message.to_string(),
        }
    }
}
