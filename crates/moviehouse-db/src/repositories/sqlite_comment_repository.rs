//! `SQLite` implementation of the `CommentRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use moviehouse_core::{Comment, CommentRepository, RepositoryError};

use super::row_mappers::{COMMENT_SELECT_COLUMNS, row_to_comment};

/// `SQLite` implementation of the `CommentRepository` trait.
///
/// Comments are read-only; this repository only fetches them in bulk,
/// in insertion order. Callers that want most-recent-first reverse the
/// sequence themselves.
pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    /// Create a new `SQLite` comment repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn list(&self) -> Result<Vec<Comment>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM comments ORDER BY id ASC",
            COMMENT_SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_comment).collect()
    }
}
