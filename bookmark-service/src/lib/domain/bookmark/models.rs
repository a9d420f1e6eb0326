use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::auth::models::UserId;
use crate::domain::bookmark::errors::BookmarkIdError;
use crate::domain::bookmark::errors::LinkError;
use crate::domain::bookmark::errors::TitleError;

/// Bookmark aggregate entity.
///
/// `owner` is set once at creation from the authenticated identity and is
/// immutable for the bookmark's entire lifetime; no command carries an owner
/// field, so no operation can reassign it.
#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub owner: UserId,
    pub title: BookmarkTitle,
    pub link: BookmarkLink,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Bookmark unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(pub Uuid);

impl BookmarkId {
    /// Generate a new random bookmark ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a bookmark ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookmarkIdError> {
        Uuid::parse_str(s)
            .map(BookmarkId)
            .map_err(|e| BookmarkIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bookmark title value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    /// Create a new non-empty title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    pub fn new(title: String) -> Result<Self, TitleError> {
        if title.trim().is_empty() {
            return Err(TitleError::Empty);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Bookmark target reference value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkLink(String);

impl BookmarkLink {
    /// Create a new non-empty link.
    ///
    /// # Errors
    /// * `Empty` - Link is empty or whitespace only
    pub fn new(link: String) -> Result<Self, LinkError> {
        if link.trim().is_empty() {
            return Err(LinkError::Empty);
        }
        Ok(Self(link))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new bookmark with validated fields.
///
/// Carries no owner: the service forces the owner from the calling identity.
#[derive(Debug)]
pub struct CreateBookmarkCommand {
    pub title: BookmarkTitle,
    pub link: BookmarkLink,
    pub description: Option<String>,
}

impl CreateBookmarkCommand {
    pub fn new(title: BookmarkTitle, link: BookmarkLink, description: Option<String>) -> Self {
        Self {
            title,
            link,
            description,
        }
    }
}

/// Command to update an existing bookmark.
///
/// All fields are optional to support partial updates; absent fields are
/// left unchanged. Ownership is not a field and cannot be updated.
#[derive(Debug)]
pub struct UpdateBookmarkCommand {
    pub title: Option<BookmarkTitle>,
    pub link: Option<BookmarkLink>,
    pub description: Option<String>,
}
