//! Error types for reply extraction

use thiserror::Error;

/// Errors that can occur while segmenting an email body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input text cannot be segmented (currently: it is empty)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for reply extraction operations
pub type Result<T> = std::result::Result<T, ParseError>;
