use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_bookmark(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(bookmark_id): Path<String>,
) -> Result<ApiSuccess<GetBookmarkResponseData>, ApiError> {
    let bookmark_id =
        BookmarkId::from_string(&bookmark_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .bookmark_service
        .get_bookmark(caller.user_id, bookmark_id)
        .await
        .map_err(ApiError::from)
        .map(|ref bookmark| ApiSuccess::new(StatusCode::OK, bookmark.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBookmarkResponseData {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Bookmark> for GetBookmarkResponseData {
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
