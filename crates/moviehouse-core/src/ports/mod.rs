//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx`, `axum`, or `tera` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - Failures are normal return values, never panics

pub mod comment_repository;
pub mod movie_repository;
pub mod renderer;

use std::sync::Arc;
use thiserror::Error;

pub use comment_repository::CommentRepository;
pub use movie_repository::MovieRepository;
pub use renderer::{RenderError, Renderer};

/// Container for all repository trait objects.
///
/// This struct provides a consistent way to wire repositories across
/// adapters without coupling them to concrete implementations. It lives
/// here so the web adapter can accept it without depending on
/// `moviehouse-db` directly in its handlers.
#[derive(Clone)]
pub struct Repos {
    /// Movie repository for CRUD operations on movies.
    pub movies: Arc<dyn MovieRepository>,
    /// Comment repository (read-only).
    pub comments: Arc<dyn CommentRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(movies: Arc<dyn MovieRepository>, comments: Arc<dyn CommentRepository>) -> Self {
        Self { movies, comments }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.,
/// sqlx errors) and provides a clean interface for callers to handle
/// storage failures. A failed mutation or lookup is an ordinary value of
/// this type, inspected by the handler that made the call.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., NOT NULL, CHECK).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    /// Whether this error means the target row simply did not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own surfaces (HTTP responses, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
