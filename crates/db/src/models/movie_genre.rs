//! Movie-genre association model.

use cinelink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_genres` junction table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MovieGenre {
    pub id_movie: DbId,
    pub id_genre: DbId,
}

/// DTO for tagging a movie with a genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieGenre {
    pub id_movie: DbId,
    pub id_genre: DbId,
}
