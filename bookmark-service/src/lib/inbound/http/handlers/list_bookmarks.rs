use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<BookmarkData>>, ApiError> {
    state
        .bookmark_service
        .list_bookmarks(caller.user_id)
        .await
        .map_err(ApiError::from)
        .map(|bookmarks| {
            ApiSuccess::new(
                StatusCode::OK,
                bookmarks.iter().map(BookmarkData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkData {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Bookmark> for BookmarkData {
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
