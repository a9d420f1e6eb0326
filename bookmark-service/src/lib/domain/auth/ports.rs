use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::User;

/// Port for credential issuance operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity and issue its first access token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and password pair
    ///
    /// # Returns
    /// Signed access token for the created identity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHash` / `TokenIssuance` - Crypto primitive failed
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Authenticate an existing identity and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and password pair
    ///
    /// # Returns
    /// Signed access token for the identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, reported
    ///   identically for both
    /// * `PasswordHash` / `TokenIssuance` - Crypto primitive failed
    /// * `DatabaseError` - Database operation failed
    async fn signin(&self, credentials: Credentials) -> Result<String, AuthError>;
}

/// Persistence operations for the identity aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new identity, enforcing email uniqueness.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered; the storage
    ///   layer's unique constraint is the single source of truth for the
    ///   uniqueness race between concurrent signups
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve an identity by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;
}
