//! Error types for sealnote

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sealnote application
#[derive(Debug, Error)]
pub enum SealnoteError {
    #[error("Cannot read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Key must be 16, 24 or 32 bytes long, got {0}")]
    KeyLength(usize),

    #[error("Encryption failed")]
    Encrypt,

    #[error("Decryption failed: note is corrupted or the key is wrong")]
    Decrypt,

    #[error("Decrypted note is not valid UTF-8")]
    NoteEncoding(#[from] std::string::FromUtf8Error),

    #[error("Invalid note id '{0}': only numbers are allowed")]
    InvalidNoteId(String),

    #[error("No note ids given")]
    NoNoteIds,
}

impl SealnoteError {
    /// Get the process exit code for this error.
    /// Every failure is fatal for a one-shot CLI, so they all map to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type using SealnoteError
pub type Result<T> = std::result::Result<T, SealnoteError>;
