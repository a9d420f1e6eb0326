use std::sync::Arc;

use async_trait::async_trait;
use auth_core::Claims;
use auth_core::PasswordHasher;
use auth_core::TokenIssuer;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserRepository;

/// Credential issuance orchestration.
///
/// Coordinates the password hasher, the identity store, and the token issuer.
/// Generic over the repository for testability; all collaborators are passed
/// in explicitly.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_issuer: Arc<TokenIssuer>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected collaborators.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `token_issuer` - Configured token signer
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            token_issuer,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::for_identity(user.id, user.email.as_str());
        self.token_issuer
            .issue(&claims)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, credentials: Credentials) -> Result<String, AuthError> {
        let password_hash = self
            .password_hasher
            .hash(credentials.password.as_str())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            email: credentials.email,
            password_hash,
            created_at: Utc::now(),
        };

        // The unique constraint on email decides the race between concurrent
        // signups; a conflict surfaces as EmailAlreadyExists.
        let created_user = self.repository.create(user).await?;

        self.issue_token(&created_user)
    }

    async fn signin(&self, credentials: Credentials) -> Result<String, AuthError> {
        // Unknown email and wrong password both end in InvalidCredentials so
        // the response never reveals which emails are registered.
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(&user.password_hash, credentials.password.as_str())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(&user)
    }
}
