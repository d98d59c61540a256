//! Movie domain types.

use serde::{Deserialize, Serialize};

/// A movie that exists in the system with a database ID.
///
/// This represents a persisted movie. Use `NewMovie` for movies that
/// haven't been persisted yet. The id is assigned by the store and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Database ID of the movie (always present for persisted movies).
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Category the movie is filed under (e.g., "comedy", "horror").
    pub category: String,
    /// Ticket/rental price.
    pub price: f64,
    /// Running sum of all votes cast. Never negative.
    pub vote_total: i64,
    /// Number of votes cast. Never negative.
    pub num_votes: i64,
}

impl Movie {
    /// Average vote for the movie, or `None` when no votes have been cast.
    pub fn average_vote(&self) -> Option<f64> {
        if self.num_votes == 0 {
            None
        } else {
            Some(self.vote_total as f64 / self.num_votes as f64)
        }
    }
}

/// A movie to be inserted into the system (no ID yet).
///
/// Vote accumulators are not part of this type: every created movie
/// starts with `vote_total = 0` and `num_votes = 0`, enforced by the
/// repository on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    /// Display title.
    pub title: String,
    /// Category the movie is filed under.
    pub category: String,
    /// Ticket/rental price.
    pub price: f64,
}
