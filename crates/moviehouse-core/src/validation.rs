//! Form input validation.
//!
//! Submitted form fields arrive as raw text. These types hold that raw
//! text and parse it into typed domain values at the boundary, so the
//! store never sees unvalidated input. A failed parse is a
//! `CoreError::Validation` carrying a human-readable message.

use crate::domain::{Movie, NewMovie};
use crate::ports::CoreError;

/// Raw fields submitted from the new-movie form.
#[derive(Debug, Clone, Default)]
pub struct MovieDraft {
    pub title: String,
    pub category: String,
    pub price: String,
}

impl MovieDraft {
    /// Parse the draft into a typed `NewMovie`.
    pub fn parse(&self) -> Result<NewMovie, CoreError> {
        let title = require_text("title", &self.title)?;
        let category = require_text("category", &self.category)?;
        let price = parse_price(&self.price)?;

        Ok(NewMovie {
            title,
            category,
            price,
        })
    }
}

/// Raw fields submitted from the edit-movie form, id included.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub vote_total: String,
    pub num_votes: String,
}

impl MovieUpdate {
    /// Parse the submitted fields into a typed `Movie` ready for update.
    pub fn parse(&self) -> Result<Movie, CoreError> {
        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::Validation(format!("invalid movie id '{}'", self.id)))?;
        let title = require_text("title", &self.title)?;
        let category = require_text("category", &self.category)?;
        let price = parse_price(&self.price)?;
        let vote_total = parse_count("voteTotal", &self.vote_total)?;
        let num_votes = parse_count("numVotes", &self.num_votes)?;

        Ok(Movie {
            id,
            title,
            category,
            price,
            vote_total,
            num_votes,
        })
    }
}

fn require_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn parse_price(value: &str) -> Result<f64, CoreError> {
    let price = value
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("invalid price '{value}'")))?;
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation(format!(
            "price must be a non-negative number, got '{value}'"
        )));
    }
    Ok(price)
}

fn parse_count(field: &str, value: &str) -> Result<i64, CoreError> {
    let count = value
        .trim()
        .parse::<i64>()
        .map_err(|_| CoreError::Validation(format!("invalid {field} '{value}'")))?;
    if count < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got '{value}'"
        )));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, category: &str, price: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_string(),
            category: category.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn valid_draft_parses() {
        let movie = draft("Alien", "scifi", "9.99").parse().unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.category, "scifi");
        assert!((movie.price - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn draft_trims_whitespace() {
        let movie = draft("  Alien ", " scifi ", " 5 ").parse().unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.category, "scifi");
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = draft("   ", "scifi", "9.99").parse().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = draft("Alien", "scifi", "-1").parse().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = draft("Alien", "scifi", "cheap").parse().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    fn update_fields() -> MovieUpdate {
        MovieUpdate {
            id: "3".to_string(),
            title: "Alien".to_string(),
            category: "scifi".to_string(),
            price: "9.99".to_string(),
            vote_total: "40".to_string(),
            num_votes: "10".to_string(),
        }
    }

    #[test]
    fn valid_update_parses_all_six_fields() {
        let movie = update_fields().parse().unwrap();
        assert_eq!(movie.id, 3);
        assert_eq!(movie.vote_total, 40);
        assert_eq!(movie.num_votes, 10);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let mut fields = update_fields();
        fields.id = "abc".to_string();
        let err = fields.parse().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn negative_vote_total_is_rejected() {
        let mut fields = update_fields();
        fields.vote_total = "-5".to_string();
        let err = fields.parse().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
