//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use moviehouse_core::{Comment, Movie, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for movie queries.
pub const MOVIE_SELECT_COLUMNS: &str = "id, title, category, price, vote_total, num_votes";

/// Shared SELECT column list for comment queries.
pub const COMMENT_SELECT_COLUMNS: &str = "id, author, body, posted_at";

/// Helper to parse SQLite `datetime('now')` strings into UTC timestamps.
pub fn parse_datetime(datetime_str: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .ok()
}

/// Parse a database row into a Movie.
pub fn row_to_movie(row: &sqlx::sqlite::SqliteRow) -> Result<Movie, RepositoryError> {
    Ok(Movie {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        title: row
            .try_get("title")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        category: row
            .try_get("category")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        price: row
            .try_get("price")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        vote_total: row
            .try_get("vote_total")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        num_votes: row
            .try_get("num_votes")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Parse a database row into a Comment.
pub fn row_to_comment(row: &sqlx::sqlite::SqliteRow) -> Result<Comment, RepositoryError> {
    let posted_at_str: String = row
        .try_get("posted_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    // A posted_at we cannot parse means the row is corrupt; surface it
    // instead of re-dating the comment.
    let posted_at = parse_datetime(&posted_at_str).ok_or_else(|| {
        RepositoryError::Storage(format!("unparseable posted_at '{posted_at_str}'"))
    })?;

    Ok(Comment {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        author: row
            .try_get("author")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        body: row
            .try_get("body")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        posted_at,
    })
}
