use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let bookmark_id = BookmarkId::from_string(&id).map_err(BookmarkError::from)?;

    state
        .bookmark_service
        .delete_bookmark(caller.user_id, bookmark_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
