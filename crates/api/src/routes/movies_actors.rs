//! Route definitions for movie-actor links, mounted at `/moviesactors`
//! and `/movies-actors`.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies_actors;
use crate::state::AppState;

/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /actor/{id}              -> movies_for_actor
/// GET    /movie/{id}              -> actors_for_movie
/// GET    /{id_movie}/{id_actor}   -> get_link
/// DELETE /{id_movie}/{id_actor}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies_actors::list).post(movies_actors::create))
        .route("/actor/{id}", get(movies_actors::movies_for_actor))
        .route("/movie/{id}", get(movies_actors::actors_for_movie))
        .route(
            "/{id_movie}/{id_actor}",
            get(movies_actors::get_link).delete(movies_actors::delete),
        )
}
