//! Error types for the express sound queue.

use thiserror::Error;

use crate::types::EntryId;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sound queue, cache, and decoder.
#[derive(Error, Debug)]
pub enum Error {
    // Decoder errors
    #[error("Invalid sound block: {0}")]
    InvalidBlock(String),

    // Queue errors
    #[error("Sound entry {0} is not queued")]
    EntryNotFound(EntryId),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    // Save-state errors
    #[error("Invalid save data: {0}")]
    InvalidSave(String),

    #[error("Save data truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    // Stream errors
    #[error("Sound stream error: {0}")]
    Stream(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the caller can carry on after this error.
    ///
    /// A dropped entry or an unsupported save path leaves the queue intact;
    /// broken input data and I/O failures do not.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::EntryNotFound(_) | Self::Unsupported(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverable() {
        assert!(Error::Unsupported("load".into()).is_recoverable());
        assert!(Error::EntryNotFound(EntryId::new()).is_recoverable());
        assert!(!Error::InvalidBlock("short".into()).is_recoverable());
        assert!(!Error::InvalidSave("sound type".into()).is_recoverable());
        assert!(!Error::Truncated {
            needed: 4,
            available: 0
        }
        .is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Truncated {
            needed: 12,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "Save data truncated: needed 12 bytes, 8 available"
        );
    }
}
