//! Comment repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Comment;

/// Repository for comment reads.
///
/// Comments are read-only in this system, so the trait exposes a single
/// bulk fetch. Display ordering (most recent first) is the caller's
/// concern; implementations return insertion order.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List all comments in insertion order.
    async fn list(&self) -> Result<Vec<Comment>, RepositoryError>;
}
