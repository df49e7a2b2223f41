pub mod actors;
pub mod game;
pub mod genres;
pub mod movies;
pub mod movies_actors;
pub mod movies_genres;

use cinelink_core::types::DbId;
use cinelink_db::repositories::{ActorRepo, GenreRepo, MovieRepo};
use cinelink_db::DbPool;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Parent existence checks shared by the association handlers
// ---------------------------------------------------------------------------

pub(crate) async fn ensure_movie(pool: &DbPool, id: DbId) -> AppResult<()> {
    MovieRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Movie", id))
}

pub(crate) async fn ensure_actor(pool: &DbPool, id: DbId) -> AppResult<()> {
    ActorRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Actor", id))
}

pub(crate) async fn ensure_genre(pool: &DbPool, id: DbId) -> AppResult<()> {
    GenreRepo::find_by_id(pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::not_found("Genre", id))
}
