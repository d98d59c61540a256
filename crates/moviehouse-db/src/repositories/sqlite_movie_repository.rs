//! `SQLite` implementation of the `MovieRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use moviehouse_core::{Movie, MovieRepository, NewMovie, RepositoryError};

use super::row_mappers::{MOVIE_SELECT_COLUMNS, row_to_movie};

/// `SQLite` implementation of the `MovieRepository` trait.
///
/// This struct holds a connection pool and implements all CRUD
/// operations for movies using `SQLite`.
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    /// Create a new `SQLite` movie repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!("SELECT {} FROM movies ORDER BY id ASC", MOVIE_SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Movie, RepositoryError> {
        let query = format!("SELECT {} FROM movies WHERE id = ?", MOVIE_SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Movie with ID {id}")))?;

        row_to_movie(&row)
    }

    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError> {
        // vote_total and num_votes come from the column defaults: every
        // freshly created movie starts with zero votes.
        let result = sqlx::query("INSERT INTO movies (title, category, price) VALUES (?, ?, ?)")
            .bind(&movie.title)
            .bind(&movie.category)
            .bind(movie.price)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, movie: &Movie) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE movies SET title = ?, category = ?, price = ?, vote_total = ?, num_votes = ? WHERE id = ?",
        )
        .bind(&movie.title)
        .bind(&movie.category)
        .bind(movie.price)
        .bind(movie.vote_total)
        .bind(movie.num_votes)
        .bind(movie.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Movie with ID {}",
                movie.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Movie with ID {id}")));
        }

        Ok(())
    }
}
