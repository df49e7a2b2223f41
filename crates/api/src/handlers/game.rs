//! Handlers for game scoring (`/game`).

use axum::extract::State;
use axum::Json;
use cinelink_core::game::Verdict;
use cinelink_core::types::DbId;
use cinelink_db::repositories::MovieActorRepo;
use serde::Deserialize;

use super::{ensure_actor, ensure_movie};
use crate::error::AppResult;
use crate::state::AppState;

/// Body of `POST /game/check`: an actor card dropped on a movie node.
#[derive(Debug, Deserialize)]
pub struct CheckDrop {
    pub id_movie: DbId,
    pub id_actor: DbId,
}

/// POST /game/check
///
/// Returns `{ "correct": bool, "points": n }`. Unknown ids are 404 so the
/// client can tell a wrong guess from stale board state.
pub async fn check(
    State(state): State<AppState>,
    Json(input): Json<CheckDrop>,
) -> AppResult<Json<Verdict>> {
    ensure_movie(&state.pool, input.id_movie).await?;
    ensure_actor(&state.pool, input.id_actor).await?;

    let linked = MovieActorRepo::exists(&state.pool, input.id_movie, input.id_actor).await?;
    let verdict = Verdict::for_link(linked);

    tracing::debug!(
        id_movie = input.id_movie,
        id_actor = input.id_actor,
        correct = verdict.correct,
        "Drop checked"
    );
    Ok(Json(verdict))
}
