//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelink_core::catalog::{validate_movie_title, validate_movie_year};
use cinelink_core::types::DbId;
use cinelink_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use cinelink_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::response::ListResponse;
use crate::state::AppState;

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    validate_movie_title(&input.title)?;
    validate_movie_year(input.year)?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, year = movie.year, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new("All Movies", movies)))
}

/// GET /movies/random
///
/// The game client calls this once per movie node it places on the board.
pub async fn random(State(state): State<AppState>) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_random(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No movies available".into()))?;
    Ok(Json(movie))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Movie", id))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    if let Some(title) = &input.title {
        validate_movie_title(title)?;
    }
    if let Some(year) = input.year {
        validate_movie_year(year)?;
    }
    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Movie", id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Movie", id))
    }
}
