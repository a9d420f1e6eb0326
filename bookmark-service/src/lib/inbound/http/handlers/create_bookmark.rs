use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::bookmark::errors::LinkError;
use crate::domain::bookmark::errors::TitleError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkLink;
use crate::domain::bookmark::models::BookmarkTitle;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(body): Json<CreateBookmarkRequest>,
) -> Result<ApiSuccess<CreateBookmarkResponseData>, ApiError> {
    state
        .bookmark_service
        .create_bookmark(caller.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref bookmark| ApiSuccess::new(StatusCode::CREATED, bookmark.into()))
}

/// HTTP request body for creating a bookmark (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookmarkRequest {
    title: String,
    link: String,
    description: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookmarkRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] TitleError),

    #[error("Invalid link: {0}")]
    Link(#[from] LinkError),
}

impl CreateBookmarkRequest {
    fn try_into_command(self) -> Result<CreateBookmarkCommand, ParseCreateBookmarkRequestError> {
        let title = BookmarkTitle::new(self.title)?;
        let link = BookmarkLink::new(self.link)?;
        Ok(CreateBookmarkCommand::new(title, link, self.description))
    }
}

impl From<ParseCreateBookmarkRequestError> for ApiError {
    fn from(err: ParseCreateBookmarkRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateBookmarkResponseData {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Bookmark> for CreateBookmarkResponseData {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.to_string(),
            owner: bookmark.owner.to_string(),
            title: bookmark.title.as_str().to_string(),
            link: bookmark.link.as_str().to_string(),
            description: bookmark.description.clone(),
            created_at: bookmark.created_at,
        }
    }
}
