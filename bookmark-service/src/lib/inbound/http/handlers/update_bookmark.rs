use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::BookmarkLink;
use crate::domain::bookmark::models::BookmarkTitle;
use crate::domain::bookmark::models::UpdateBookmarkCommand;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a bookmark (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl UpdateBookmarkRequest {
    fn try_into_command(self) -> Result<UpdateBookmarkCommand, BookmarkError> {
        // Validation happens here - errors are automatically converted via #[from]
        let title = self.title.map(BookmarkTitle::new).transpose()?;

        let link = self.link.map(BookmarkLink::new).transpose()?;

        Ok(UpdateBookmarkCommand {
            title,
            link,
            description: self.description,
        })
    }
}

/// Response body for bookmark update
#[derive(Debug, Serialize, PartialEq)]
pub struct BookmarkResponse {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id.to_string(),
            owner: bookmark.owner.to_string(),
            title: bookmark.title.as_str().to_string(),
            link: bookmark.link.as_str().to_string(),
            description: bookmark.description,
            created_at: bookmark.created_at.to_rfc3339(),
        }
    }
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> Result<ApiSuccess<BookmarkResponse>, ApiError> {
    // Parse bookmark ID and request at the HTTP boundary
    let bookmark_id = BookmarkId::from_string(&id).map_err(BookmarkError::from)?;
    let command = req.try_into_command()?;

    state
        .bookmark_service
        .update_bookmark(caller.user_id, bookmark_id, command)
        .await
        .map_err(ApiError::from)
        .map(|bookmark| ApiSuccess::new(StatusCode::OK, bookmark.into()))
}
