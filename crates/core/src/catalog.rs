//! Field rules for catalog records (actors, movies, genres).
//!
//! Handlers call these before any insert or update so the database only
//! ever sees well-formed values.

use crate::error::CoreError;

/// Maximum length of an actor name or genre label.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 300;

/// Earliest accepted release year (first surviving motion picture).
pub const MIN_YEAR: i32 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

/// Validate an actor name (non-empty after trimming, at most 200 chars).
pub fn validate_actor_name(name: &str) -> Result<(), CoreError> {
    validate_text("Actor name", name, MAX_NAME_LEN)
}

/// Validate a genre label (non-empty after trimming, at most 200 chars).
pub fn validate_genre_label(genre: &str) -> Result<(), CoreError> {
    validate_text("Genre", genre, MAX_NAME_LEN)
}

/// Validate a movie title (non-empty after trimming, at most 300 chars).
pub fn validate_movie_title(title: &str) -> Result<(), CoreError> {
    validate_text("Movie title", title, MAX_TITLE_LEN)
}

/// Validate a movie release year against [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn validate_movie_year(year: i32) -> Result<(), CoreError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}
