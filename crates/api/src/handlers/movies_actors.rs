//! Handlers for movie-actor links (`/moviesactors`).
//!
//! The two lookups return bare arrays: the game client checks a drop by
//! scanning `/moviesactors/actor/{id}` for the target movie id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelink_core::error::CoreError;
use cinelink_core::types::DbId;
use cinelink_db::models::actor::Actor;
use cinelink_db::models::movie::Movie;
use cinelink_db::models::movie_actor::{CreateMovieActor, MovieActor};
use cinelink_db::repositories::MovieActorRepo;

use super::{ensure_actor, ensure_movie};
use crate::error::{AppError, AppResult};
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /moviesactors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<MovieActor>>> {
    let links = MovieActorRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new("All Movies-Actors", links)))
}

/// POST /moviesactors
///
/// 404 if either side is missing, 409 if the actor is already in the cast.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovieActor>,
) -> AppResult<(StatusCode, Json<MovieActor>)> {
    ensure_movie(&state.pool, input.id_movie).await?;
    ensure_actor(&state.pool, input.id_actor).await?;

    let link = MovieActorRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Actor {} is already linked to movie {}",
                input.id_actor, input.id_movie
            )))
        })?;

    tracing::info!(
        id_movie = link.id_movie,
        id_actor = link.id_actor,
        "Movie-actor link created"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /moviesactors/actor/{id}
///
/// Movies the actor appears in.
pub async fn movies_for_actor(
    State(state): State<AppState>,
    Path(id_actor): Path<DbId>,
) -> AppResult<Json<Vec<Movie>>> {
    ensure_actor(&state.pool, id_actor).await?;
    let movies = MovieActorRepo::movies_for_actor(&state.pool, id_actor).await?;
    Ok(Json(movies))
}

/// GET /moviesactors/movie/{id}
///
/// Cast of the movie.
pub async fn actors_for_movie(
    State(state): State<AppState>,
    Path(id_movie): Path<DbId>,
) -> AppResult<Json<Vec<Actor>>> {
    ensure_movie(&state.pool, id_movie).await?;
    let actors = MovieActorRepo::actors_for_movie(&state.pool, id_movie).await?;
    Ok(Json(actors))
}

/// GET /moviesactors/{id_movie}/{id_actor}
pub async fn get_link(
    State(state): State<AppState>,
    Path((id_movie, id_actor)): Path<(DbId, DbId)>,
) -> AppResult<Json<MovieActor>> {
    let link = MovieActorRepo::find(&state.pool, id_movie, id_actor)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Actor {id_actor} is not linked to movie {id_movie}"
            ))
        })?;
    Ok(Json(link))
}

/// DELETE /moviesactors/{id_movie}/{id_actor}
pub async fn delete(
    State(state): State<AppState>,
    Path((id_movie, id_actor)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if MovieActorRepo::delete(&state.pool, id_movie, id_actor).await? {
        tracing::info!(id_movie, id_actor, "Movie-actor link deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Actor {id_actor} is not linked to movie {id_movie}"
        )))
    }
}
