//! Handlers for the `/actors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelink_core::catalog::validate_actor_name;
use cinelink_core::types::DbId;
use cinelink_db::models::actor::{Actor, CreateActor, UpdateActor};
use cinelink_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::response::ListResponse;
use crate::state::AppState;

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    validate_actor_name(&input.name)?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.id, "Actor created");
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new("All Actors", actors)))
}

/// GET /actors/random
///
/// 404 when there are no actors at all.
pub async fn random(State(state): State<AppState>) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_random(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("No actors available".into()))?;
    Ok(Json(actor))
}

/// GET /actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Actor", id))?;
    Ok(Json(actor))
}

/// PUT /actors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<Json<Actor>> {
    if let Some(name) = &input.name {
        validate_actor_name(name)?;
    }
    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Actor", id))?;
    tracing::info!(actor_id = id, "Actor updated");
    Ok(Json(actor))
}

/// DELETE /actors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ActorRepo::delete(&state.pool, id).await? {
        tracing::info!(actor_id = id, "Actor deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Actor", id))
    }
}
