//! `SQLite` repository implementations.

pub mod row_mappers;
pub mod sqlite_comment_repository;
pub mod sqlite_movie_repository;

pub use sqlite_comment_repository::SqliteCommentRepository;
pub use sqlite_movie_repository::SqliteMovieRepository;
