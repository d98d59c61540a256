#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{Comment, Movie, NewMovie};
pub use ports::{
    CommentRepository, CoreError, MovieRepository, RenderError, Renderer, Repos, RepositoryError,
};
pub use validation::{MovieDraft, MovieUpdate};
