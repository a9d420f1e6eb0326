use thiserror::Error;

/// Error for BookmarkId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookmarkIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for BookmarkTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,
}

/// Error for BookmarkLink validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Link must not be empty")]
    Empty,
}

/// Top-level error for all bookmark operations
#[derive(Debug, Clone, Error)]
pub enum BookmarkError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid bookmark ID: {0}")]
    InvalidBookmarkId(#[from] BookmarkIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Invalid link: {0}")]
    InvalidLink(#[from] LinkError),

    /// Covers both a missing bookmark and one owned by someone else; the two
    /// cases must stay indistinguishable so existence is never revealed to
    /// non-owners.
    #[error("Access to resource denied")]
    AccessDenied,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for BookmarkError {
    fn from(err: anyhow::Error) -> Self {
        BookmarkError::Unknown(err.to_string())
    }
}
