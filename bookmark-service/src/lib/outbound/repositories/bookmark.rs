use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::models::UserId;
use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::BookmarkLink;
use crate::domain::bookmark::models::BookmarkTitle;
use crate::domain::bookmark::ports::BookmarkRepository;

pub struct PostgresBookmarkRepository {
    pool: PgPool,
}

impl PostgresBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    link: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl BookmarkRow {
    fn into_bookmark(self) -> Result<Bookmark, BookmarkError> {
        Ok(Bookmark {
            id: BookmarkId(self.id),
            owner: UserId(self.owner_id),
            title: BookmarkTitle::new(self.title)?,
            link: BookmarkLink::new(self.link)?,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (id, owner_id, title, link, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(bookmark.id.0)
        .bind(bookmark.owner.0)
        .bind(bookmark.title.as_str())
        .bind(bookmark.link.as_str())
        .bind(&bookmark.description)
        .bind(bookmark.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        Ok(bookmark)
    }

    async fn find_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, BookmarkError> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, owner_id, title, link, description, created_at
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        row.map(BookmarkRow::into_bookmark).transpose()
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, owner_id, title, link, description, created_at
            FROM bookmarks
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(BookmarkRow::into_bookmark).collect()
    }

    async fn update(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        // owner_id is deliberately absent from the SET list; ownership is
        // immutable.
        let result = sqlx::query(
            r#"
            UPDATE bookmarks
            SET title = $2, link = $3, description = $4
            WHERE id = $1
            "#,
        )
        .bind(bookmark.id.0)
        .bind(bookmark.title.as_str())
        .bind(bookmark.link.as_str())
        .bind(&bookmark.description)
        .execute(&self.pool)
        .await
        .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        // Row vanished between the ownership check and the write; absence is
        // reported the same way as a failed ownership check.
        if result.rows_affected() == 0 {
            return Err(BookmarkError::AccessDenied);
        }

        Ok(bookmark)
    }

    async fn delete(&self, id: BookmarkId) -> Result<(), BookmarkError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(BookmarkError::AccessDenied);
        }

        Ok(())
    }
}
