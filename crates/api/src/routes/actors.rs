//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /random    -> random
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list).post(actors::create))
        .route("/random", get(actors::random))
        .route(
            "/{id}",
            get(actors::get_by_id)
                .put(actors::update)
                .delete(actors::delete),
        )
}
