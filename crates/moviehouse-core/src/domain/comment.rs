//! Comment domain type.
//!
//! Comments are read-only in this system: they are fetched in bulk for
//! the list page and displayed most-recent-first. No create, update, or
//! delete operations exist for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visitor comment shown on the list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Database ID of the comment.
    pub id: i64,
    /// Display name of the commenter.
    pub author: String,
    /// The comment text.
    pub body: String,
    /// UTC timestamp of when the comment was posted.
    pub posted_at: DateTime<Utc>,
}
