//! Composition utilities for wiring `SQLite` repositories.
//!
//! This module provides factory functions for building the repository
//! container from a pool. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use moviehouse_core::Repos;

use crate::repositories::{SqliteCommentRepository, SqliteMovieRepository};

/// Factory for creating repository instances with `SQLite` backends.
///
/// Composition utilities only — no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `moviehouse-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteMovieRepository::new(pool.clone())),
            Arc::new(SqliteCommentRepository::new(pool)),
        )
    }

    /// Create a movie repository from a pool.
    pub fn movie_repository(pool: SqlitePool) -> Arc<SqliteMovieRepository> {
        Arc::new(SqliteMovieRepository::new(pool))
    }

    /// Create a comment repository from a pool.
    pub fn comment_repository(pool: SqlitePool) -> Arc<SqliteCommentRepository> {
        Arc::new(SqliteCommentRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied, plus seeding helpers so tests can set up known
/// store contents without going through the repositories under test.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build the repository container over this test database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Create a movie repository using this test database.
    pub fn movie_repository(&self) -> SqliteMovieRepository {
        SqliteMovieRepository::new(self.pool.clone())
    }

    /// Create a comment repository using this test database.
    pub fn comment_repository(&self) -> SqliteCommentRepository {
        SqliteCommentRepository::new(self.pool.clone())
    }

    /// Insert a movie row directly, returning its assigned id.
    pub async fn seed_movie(&self, title: &str, category: &str, price: f64) -> anyhow::Result<i64> {
        let result = sqlx::query("INSERT INTO movies (title, category, price) VALUES (?, ?, ?)")
            .bind(title)
            .bind(category)
            .bind(price)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a comment row directly, returning its assigned id.
    pub async fn seed_comment(&self, author: &str, body: &str) -> anyhow::Result<i64> {
        let result = sqlx::query("INSERT INTO comments (author, body) VALUES (?, ?)")
            .bind(author)
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Count movie rows, bypassing the repository layer.
    pub async fn movie_count(&self) -> anyhow::Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
