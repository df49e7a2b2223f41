//! Genre entity model and DTOs.

use cinelink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `genres` table. `genre` is unique (`uq_genres_genre`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub genre: String,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub genre: String,
}

/// DTO for renaming a genre.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGenre {
    pub genre: Option<String>,
}
