//! Handlers for movie-genre links (`/moviesgenres`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelink_core::error::CoreError;
use cinelink_core::types::DbId;
use cinelink_db::models::genre::Genre;
use cinelink_db::models::movie::Movie;
use cinelink_db::models::movie_genre::{CreateMovieGenre, MovieGenre};
use cinelink_db::repositories::MovieGenreRepo;

use super::{ensure_genre, ensure_movie};
use crate::error::{AppError, AppResult};
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /moviesgenres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<MovieGenre>>> {
    let links = MovieGenreRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new("All Movies-Genres", links)))
}

/// POST /moviesgenres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovieGenre>,
) -> AppResult<(StatusCode, Json<MovieGenre>)> {
    ensure_movie(&state.pool, input.id_movie).await?;
    ensure_genre(&state.pool, input.id_genre).await?;

    let link = MovieGenreRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(format!(
                "Movie {} is already tagged with genre {}",
                input.id_movie, input.id_genre
            )))
        })?;

    tracing::info!(
        id_movie = link.id_movie,
        id_genre = link.id_genre,
        "Movie-genre link created"
    );
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /moviesgenres/movie/{id}
pub async fn genres_for_movie(
    State(state): State<AppState>,
    Path(id_movie): Path<DbId>,
) -> AppResult<Json<Vec<Genre>>> {
    ensure_movie(&state.pool, id_movie).await?;
    let genres = MovieGenreRepo::genres_for_movie(&state.pool, id_movie).await?;
    Ok(Json(genres))
}

/// GET /moviesgenres/genre/{id}
pub async fn movies_for_genre(
    State(state): State<AppState>,
    Path(id_genre): Path<DbId>,
) -> AppResult<Json<Vec<Movie>>> {
    ensure_genre(&state.pool, id_genre).await?;
    let movies = MovieGenreRepo::movies_for_genre(&state.pool, id_genre).await?;
    Ok(Json(movies))
}

/// GET /moviesgenres/{id_movie}/{id_genre}
pub async fn get_link(
    State(state): State<AppState>,
    Path((id_movie, id_genre)): Path<(DbId, DbId)>,
) -> AppResult<Json<MovieGenre>> {
    let link = MovieGenreRepo::find(&state.pool, id_movie, id_genre)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Movie {id_movie} is not tagged with genre {id_genre}"
            ))
        })?;
    Ok(Json(link))
}

/// DELETE /moviesgenres/{id_movie}/{id_genre}
pub async fn delete(
    State(state): State<AppState>,
    Path((id_movie, id_genre)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if MovieGenreRepo::delete(&state.pool, id_movie, id_genre).await? {
        tracing::info!(id_movie, id_genre, "Movie-genre link deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Movie {id_movie} is not tagged with genre {id_genre}"
        )))
    }
}
