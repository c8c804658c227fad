//! Error types for editor operations.

use crate::canvas::EmojiId;
use thiserror::Error;

/// Editor errors.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An update named an emoji that is not on the canvas.
    #[error("Emoji not found: {0}")]
    EmojiNotFound(EmojiId),
    /// The host has not reported the canvas drop area yet.
    #[error("Canvas drop area has not been laid out")]
    NotLaidOut,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
