//! Movie-actor association model (the cast of a movie).

use cinelink_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie_actors` junction table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct MovieActor {
    pub id_movie: DbId,
    pub id_actor: DbId,
}

/// DTO for linking an actor to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieActor {
    pub id_movie: DbId,
    pub id_actor: DbId,
}
