use async_trait::async_trait;

use crate::domain::auth::models::UserId;
use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::models::UpdateBookmarkCommand;

/// Port for bookmark operations, each parameterized by the calling identity.
#[async_trait]
pub trait BookmarkServicePort: Send + Sync + 'static {
    /// List all bookmarks owned by the caller.
    ///
    /// The query is scoped by owner at the storage layer, so no per-item
    /// ownership check is needed.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_bookmarks(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError>;

    /// Retrieve a single bookmark, enforcing ownership.
    ///
    /// # Errors
    /// * `AccessDenied` - Bookmark is missing or owned by someone else
    /// * `DatabaseError` - Database operation failed
    async fn get_bookmark(&self, owner: UserId, id: BookmarkId)
        -> Result<Bookmark, BookmarkError>;

    /// Create a bookmark owned by the caller.
    ///
    /// The owner is always the calling identity, regardless of request
    /// content.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_bookmark(
        &self,
        owner: UserId,
        command: CreateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError>;

    /// Partially update an owned bookmark.
    ///
    /// Only supplied fields change; ownership is re-verified before the
    /// write and can never be reassigned.
    ///
    /// # Errors
    /// * `AccessDenied` - Bookmark is missing or owned by someone else
    /// * `DatabaseError` - Database operation failed
    async fn update_bookmark(
        &self,
        owner: UserId,
        id: BookmarkId,
        command: UpdateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError>;

    /// Hard-delete an owned bookmark.
    ///
    /// Deleting an already-deleted id and deleting a non-owned id are
    /// indistinguishable: both yield `AccessDenied`.
    ///
    /// # Errors
    /// * `AccessDenied` - Bookmark is missing or owned by someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_bookmark(&self, owner: UserId, id: BookmarkId) -> Result<(), BookmarkError>;
}

/// Persistence operations for the bookmark aggregate.
#[async_trait]
pub trait BookmarkRepository: Send + Sync + 'static {
    /// Persist a new bookmark to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;

    /// Retrieve a bookmark by identifier.
    ///
    /// # Returns
    /// Optional bookmark entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, BookmarkError>;

    /// Retrieve all bookmarks for an owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError>;

    /// Update an existing bookmark in storage.
    ///
    /// # Errors
    /// * `AccessDenied` - Row no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;

    /// Remove a bookmark from storage.
    ///
    /// # Errors
    /// * `AccessDenied` - Row no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: BookmarkId) -> Result<(), BookmarkError>;
}
