//! Movie repository trait definition.
//!
//! This port defines the interface for movie persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Movie, NewMovie};

/// Repository for movie persistence operations.
///
/// This trait defines CRUD operations for movies. Implementations are
/// responsible for all storage details (SQL, filesystem, etc.).
///
/// Whether a mutation actually touched a row is part of the contract:
/// `update` and `delete` return `NotFound` when no row matched, so the
/// caller can distinguish "done" from "was never there".
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List all movies in insertion order.
    async fn list(&self) -> Result<Vec<Movie>, RepositoryError>;

    /// Get a movie by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the movie doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError>;

    /// Insert a new movie into the repository.
    ///
    /// Returns the persisted movie with its assigned ID and both vote
    /// accumulators at zero.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError>;

    /// Update an existing movie.
    ///
    /// All fields except the ID are overwritten. Returns
    /// `Err(RepositoryError::NotFound)` if the movie doesn't exist.
    async fn update(&self, movie: &Movie) -> Result<(), RepositoryError>;

    /// Delete a movie by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the movie doesn't
    /// exist, including on a repeated delete of the same ID.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
