//! Error types for paging and sorting operations

use thiserror::Error;

/// The error type for paging and sorting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    /// An argument can never produce a valid page (zero limit, zero page size)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Requested page lies outside `1..=page_count` for a non-empty source
    #[error("Page {page} is out of range - source has {page_count} page(s)")]
    OutOfRange { page: usize, page_count: usize },

    /// Sort column does not name a registered member of the element type
    #[error("Sort member not found: {member}")]
    NotFound { member: String },

    /// I/O error while loading paging configuration
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl PageError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PageError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PageError {
    fn from(err: std::io::Error) -> Self {
        PageError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::InvalidArgument {
            message: format!("Malformed paging configuration: {}", err),
        }
    }
}

/// Result type for paging and sorting operations
pub type Result<T> = std::result::Result<T, PageError>;
