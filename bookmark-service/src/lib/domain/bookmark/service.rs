use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::models::UserId;
use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::models::UpdateBookmarkCommand;
use crate::domain::bookmark::ports::BookmarkRepository;
use crate::domain::bookmark::ports::BookmarkServicePort;

/// Bookmark CRUD orchestration with ownership enforcement.
///
/// Every id-addressed operation goes through `require_owned` before
/// touching the row.
pub struct BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    /// Fetch a bookmark and verify it belongs to `owner`.
    ///
    /// A missing row and a row with a different owner produce the same
    /// `AccessDenied`, so existence is never revealed to non-owners.
    async fn require_owned(
        &self,
        owner: UserId,
        id: BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|bookmark| bookmark.owner == owner)
            .ok_or(BookmarkError::AccessDenied)
    }
}

#[async_trait]
impl<BR> BookmarkServicePort for BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    async fn list_bookmarks(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        self.repository.find_by_owner(owner).await
    }

    async fn get_bookmark(
        &self,
        owner: UserId,
        id: BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        self.require_owned(owner, id).await
    }

    async fn create_bookmark(
        &self,
        owner: UserId,
        command: CreateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError> {
        let bookmark = Bookmark {
            id: BookmarkId::new(),
            owner,
            title: command.title,
            link: command.link,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.create(bookmark).await
    }

    async fn update_bookmark(
        &self,
        owner: UserId,
        id: BookmarkId,
        command: UpdateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.require_owned(owner, id).await?;

        if let Some(new_title) = command.title {
            bookmark.title = new_title;
        }

        if let Some(new_link) = command.link {
            bookmark.link = new_link;
        }

        if let Some(new_description) = command.description {
            bookmark.description = Some(new_description);
        }

        self.repository.update(bookmark).await
    }

    async fn delete_bookmark(&self, owner: UserId, id: BookmarkId) -> Result<(), BookmarkError> {
        self.require_owned(owner, id).await?;

        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::bookmark::models::BookmarkLink;
    use crate::domain::bookmark::models::BookmarkTitle;

    mock! {
        pub TestBookmarkRepository {}

        #[async_trait]
        impl BookmarkRepository for TestBookmarkRepository {
            async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;
            async fn find_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, BookmarkError>;
            async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError>;
            async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;
            async fn delete(&self, id: BookmarkId) -> Result<(), BookmarkError>;
        }
    }

    fn sample_bookmark(owner: UserId) -> Bookmark {
        Bookmark {
            id: BookmarkId::new(),
            owner,
            title: BookmarkTitle::new("T".to_string()).unwrap(),
            link: BookmarkLink::new("https://x".to_string()).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_forces_owner_from_caller() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();

        repository
            .expect_create()
            .withf(move |bookmark| {
                bookmark.owner == owner && bookmark.title.as_str() == "T"
            })
            .times(1)
            .returning(|bookmark| Ok(bookmark));

        let service = BookmarkService::new(Arc::new(repository));
        let command = CreateBookmarkCommand::new(
            BookmarkTitle::new("T".to_string()).unwrap(),
            BookmarkLink::new("https://x".to_string()).unwrap(),
            None,
        );

        let bookmark = service.create_bookmark(owner, command).await.unwrap();
        assert_eq!(bookmark.owner, owner);
    }

    #[tokio::test]
    async fn test_get_bookmark_by_owner() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();
        let bookmark = sample_bookmark(owner);
        let bookmark_id = bookmark.id;

        repository
            .expect_find_by_id()
            .withf(move |id| *id == bookmark_id)
            .times(1)
            .returning(move |_| Ok(Some(bookmark.clone())));

        let service = BookmarkService::new(Arc::new(repository));
        let found = service.get_bookmark(owner, bookmark_id).await.unwrap();
        assert_eq!(found.id, bookmark_id);
        assert_eq!(found.owner, owner);
    }

    #[tokio::test]
    async fn test_get_bookmark_denied_for_non_owner() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();
        let bookmark = sample_bookmark(owner);
        let bookmark_id = bookmark.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(bookmark.clone())));

        let service = BookmarkService::new(Arc::new(repository));
        let intruder = UserId::new();
        let result = service.get_bookmark(intruder, bookmark_id).await;
        assert!(matches!(result.unwrap_err(), BookmarkError::AccessDenied));
    }

    #[tokio::test]
    async fn test_missing_and_non_owned_are_indistinguishable() {
        let owner = UserId::new();
        let foreign = sample_bookmark(UserId::new());
        let foreign_id = foreign.id;

        let mut repository = MockTestBookmarkRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        let service = BookmarkService::new(Arc::new(repository));
        let missing_err = service
            .get_bookmark(owner, BookmarkId::new())
            .await
            .unwrap_err();

        let mut repository = MockTestBookmarkRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(foreign.clone())));
        let service = BookmarkService::new(Arc::new(repository));
        let foreign_err = service.get_bookmark(owner, foreign_id).await.unwrap_err();

        assert_eq!(missing_err.to_string(), foreign_err.to_string());
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();
        let mut existing = sample_bookmark(owner);
        existing.description = Some("old".to_string());
        let bookmark_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(move |bookmark| {
                bookmark.owner == owner
                    && bookmark.title.as_str() == "T"
                    && bookmark.link.as_str() == "https://x"
                    && bookmark.description.as_deref() == Some("x")
            })
            .times(1)
            .returning(|bookmark| Ok(bookmark));

        let service = BookmarkService::new(Arc::new(repository));
        let command = UpdateBookmarkCommand {
            title: None,
            link: None,
            description: Some("x".to_string()),
        };

        let updated = service
            .update_bookmark(owner, bookmark_id, command)
            .await
            .unwrap();
        assert_eq!(updated.title.as_str(), "T");
        assert_eq!(updated.link.as_str(), "https://x");
        assert_eq!(updated.description.as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_update_denied_for_non_owner() {
        let mut repository = MockTestBookmarkRepository::new();
        let bookmark = sample_bookmark(UserId::new());
        let bookmark_id = bookmark.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(bookmark.clone())));
        // Denied before any write is attempted
        repository.expect_update().times(0);

        let service = BookmarkService::new(Arc::new(repository));
        let command = UpdateBookmarkCommand {
            title: Some(BookmarkTitle::new("hijacked".to_string()).unwrap()),
            link: None,
            description: None,
        };

        let result = service
            .update_bookmark(UserId::new(), bookmark_id, command)
            .await;
        assert!(matches!(result.unwrap_err(), BookmarkError::AccessDenied));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();
        let bookmark = sample_bookmark(owner);
        let bookmark_id = bookmark.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(bookmark.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == bookmark_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = BookmarkService::new(Arc::new(repository));
        assert!(service.delete_bookmark(owner, bookmark_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_twice_yields_access_denied() {
        let owner = UserId::new();

        // Second delete: the row is gone, guard reports AccessDenied
        let mut repository = MockTestBookmarkRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_delete().times(0);

        let service = BookmarkService::new(Arc::new(repository));
        let result = service.delete_bookmark(owner, BookmarkId::new()).await;
        assert!(matches!(result.unwrap_err(), BookmarkError::AccessDenied));
    }

    #[tokio::test]
    async fn test_list_delegates_to_owner_scoped_query() {
        let mut repository = MockTestBookmarkRepository::new();
        let owner = UserId::new();
        let bookmarks = vec![sample_bookmark(owner), sample_bookmark(owner)];

        let returned = bookmarks.clone();
        repository
            .expect_find_by_owner()
            .withf(move |queried| *queried == owner)
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let service = BookmarkService::new(Arc::new(repository));
        let listed = service.list_bookmarks(owner).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|bookmark| bookmark.owner == owner));
    }
}
