//! Comment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::comment::Comment;

/// Repository for asset comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// List comments for an asset, newest first.
    pub async fn list_for_asset(
        &self,
        asset_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<Page<Comment>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE asset_id = $1")
                .bind(asset_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count comments", e)
                })?;

        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE asset_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(asset_id)
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(Page::new(comments, page, total as u64))
    }

    /// Create a new comment.
    pub async fn create(&self, asset_id: Uuid, user_id: Uuid, content: &str) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (asset_id, user_id, content) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(asset_id)
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    /// Replace a comment's content.
    pub async fn update_content(&self, id: Uuid, content: &str) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update comment", e))?
        .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))
    }

    /// Delete a comment.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete comment", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Comment {id} not found")));
        }
        Ok(())
    }
}
