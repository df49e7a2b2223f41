//! Route definitions for game scoring, mounted at `/game`.

use axum::routing::post;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// ```text
/// POST   /check    -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/check", post(game::check))
}
