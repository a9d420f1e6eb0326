use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth_core::TokenIssuer;
use bookmark_service::domain::auth::errors::AuthError;
use bookmark_service::domain::auth::models::Credentials;
use bookmark_service::domain::auth::models::EmailAddress;
use bookmark_service::domain::auth::models::Password;
use bookmark_service::domain::auth::models::User;
use bookmark_service::domain::auth::models::UserId;
use bookmark_service::domain::auth::ports::UserRepository;
use bookmark_service::domain::auth::service::AuthService;
use bookmark_service::domain::bookmark::errors::BookmarkError;
use bookmark_service::domain::bookmark::models::Bookmark;
use bookmark_service::domain::bookmark::models::BookmarkId;
use bookmark_service::domain::bookmark::models::BookmarkLink;
use bookmark_service::domain::bookmark::models::BookmarkTitle;
use bookmark_service::domain::bookmark::models::CreateBookmarkCommand;
use bookmark_service::domain::bookmark::ports::BookmarkRepository;
use bookmark_service::domain::bookmark::service::BookmarkService;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory identity store standing in for Postgres.
///
/// Enforces email uniqueness the way the real store's unique constraint
/// does, so the duplicate-signup path is exercised end to end.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.email.as_str()) {
            return Err(AuthError::EmailAlreadyExists(user.email.as_str().to_string()));
        }
        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        Ok(self.users.lock().unwrap().get(email.as_str()).cloned())
    }
}

/// In-memory bookmark store standing in for Postgres.
#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: Mutex<HashMap<BookmarkId, Bookmark>>,
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        self.bookmarks
            .lock()
            .unwrap()
            .insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn find_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, BookmarkError> {
        Ok(self.bookmarks.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        Ok(self
            .bookmarks
            .lock()
            .unwrap()
            .values()
            .filter(|bookmark| bookmark.owner == owner)
            .cloned()
            .collect())
    }

    async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        if !bookmarks.contains_key(&bookmark.id) {
            return Err(BookmarkError::AccessDenied);
        }
        bookmarks.insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn delete(&self, id: BookmarkId) -> Result<(), BookmarkError> {
        match self.bookmarks.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(BookmarkError::AccessDenied),
        }
    }
}

/// The wired-up core: auth and bookmark services over in-memory gateways,
/// sharing one token issuer.
pub struct TestCore {
    pub auth_service: AuthService<InMemoryUserRepository>,
    pub bookmark_service: BookmarkService<InMemoryBookmarkRepository>,
    pub token_issuer: Arc<TokenIssuer>,
}

impl TestCore {
    pub fn new() -> Self {
        let token_issuer = Arc::new(TokenIssuer::new(TEST_SECRET).expect("Failed to build issuer"));
        Self {
            auth_service: AuthService::new(
                Arc::new(InMemoryUserRepository::default()),
                Arc::clone(&token_issuer),
            ),
            bookmark_service: BookmarkService::new(Arc::new(InMemoryBookmarkRepository::default())),
            token_issuer,
        }
    }
}

pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials::new(
        EmailAddress::new(email.to_string()).expect("Invalid test email"),
        Password::new(password.to_string()).expect("Invalid test password"),
    )
}

pub fn create_command(title: &str, link: &str) -> CreateBookmarkCommand {
    CreateBookmarkCommand::new(
        BookmarkTitle::new(title.to_string()).expect("Invalid test title"),
        BookmarkLink::new(link.to_string()).expect("Invalid test link"),
        None,
    )
}
