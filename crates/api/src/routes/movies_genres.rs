//! Route definitions for movie-genre links, mounted at `/moviesgenres`
//! and `/movies-genres`.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies_genres;
use crate::state::AppState;

/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /movie/{id}              -> genres_for_movie
/// GET    /genre/{id}              -> movies_for_genre
/// GET    /{id_movie}/{id_genre}   -> get_link
/// DELETE /{id_movie}/{id_genre}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies_genres::list).post(movies_genres::create))
        .route("/movie/{id}", get(movies_genres::genres_for_movie))
        .route("/genre/{id}", get(movies_genres::movies_for_genre))
        .route(
            "/{id_movie}/{id_genre}",
            get(movies_genres::get_link).delete(movies_genres::delete),
        )
}
