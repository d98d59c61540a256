//! Request DTOs for the web boundary.
//!
//! Form fields arrive as raw text and are deserialized into these types
//! before the core validation layer parses them into domain values.
//! Every field defaults to empty so a missing field becomes a validation
//! message instead of a framework-level rejection.

use moviehouse_core::{MovieDraft, MovieUpdate};
use serde::Deserialize;

/// Query-string parameters carrying a movie identifier.
///
/// The id is kept as raw text: a missing or malformed value is routed
/// to the error view with the raw value embedded in the message.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct IdQuery {
    pub id: String,
}

/// Fields submitted from the new-movie form.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NewMovieForm {
    pub title: String,
    pub category: String,
    pub price: String,
}

impl From<NewMovieForm> for MovieDraft {
    fn from(form: NewMovieForm) -> Self {
        MovieDraft {
            title: form.title,
            category: form.category,
            price: form.price,
        }
    }
}

/// Fields submitted from the edit-movie form, id included.
///
/// The vote fields keep the camelCase names the templates post.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateMovieForm {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    #[serde(rename = "voteTotal")]
    pub vote_total: String,
    #[serde(rename = "numVotes")]
    pub num_votes: String,
}

impl From<UpdateMovieForm> for MovieUpdate {
    fn from(form: UpdateMovieForm) -> Self {
        MovieUpdate {
            id: form.id,
            title: form.title,
            category: form.category,
            price: form.price,
            vote_total: form.vote_total,
            num_votes: form.num_votes,
        }
    }
}
