//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelink_core::catalog::validate_genre_label;
use cinelink_core::types::DbId;
use cinelink_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use cinelink_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::response::ListResponse;
use crate::state::AppState;

/// POST /genres
///
/// A duplicate label is rejected by `uq_genres_genre` and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    validate_genre_label(&input.genre)?;
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new("All Genres", genres)))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Genre", id))?;
    Ok(Json(genre))
}

/// PUT /genres/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    if let Some(genre) = &input.genre {
        validate_genre_label(genre)?;
    }
    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Genre", id))?;
    tracing::info!(genre_id = id, "Genre updated");
    Ok(Json(genre))
}

/// DELETE /genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if GenreRepo::delete(&state.pool, id).await? {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Genre", id))
    }
}
