//! Domain entity types.
//!
//! These types represent movies and comments in the system, independent
//! of any infrastructure concerns (database, templates, HTTP).

pub mod comment;
pub mod movie;

pub use comment::Comment;
pub use movie::{Movie, NewMovie};
