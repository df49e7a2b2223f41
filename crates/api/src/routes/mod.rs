pub mod actors;
pub mod game;
pub mod genres;
pub mod health;
pub mod movies;
pub mod movies_actors;
pub mod movies_genres;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Collections are mounted at the root because the game client calls
/// `/actors`, `/movies/random` and `/moviesactors/actor/{id}` directly.
///
/// ```text
/// /actors                                   list, create
/// /actors/random                            random actor
/// /actors/{id}                              get, update, delete
///
/// /movies                                   list, create
/// /movies/random                            random movie
/// /movies/{id}                              get, update, delete
///
/// /genres                                   list, create
/// /genres/{id}                              get, update, delete
///
/// /moviesactors                             list, link (alias /movies-actors)
/// /moviesactors/actor/{id}                  movies of an actor
/// /moviesactors/movie/{id}                  cast of a movie
/// /moviesactors/{id_movie}/{id_actor}       get, unlink
///
/// /moviesgenres                             list, link (alias /movies-genres)
/// /moviesgenres/movie/{id}                  genres of a movie
/// /moviesgenres/genre/{id}                  movies in a genre
/// /moviesgenres/{id_movie}/{id_genre}       get, unlink
///
/// /game/check                               score an actor-to-movie drop
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/actors", actors::router())
        .nest("/movies", movies::router())
        .nest("/genres", genres::router())
        .nest("/moviesactors", movies_actors::router())
        .nest("/movies-actors", movies_actors::router())
        .nest("/moviesgenres", movies_genres::router())
        .nest("/movies-genres", movies_genres::router())
        .nest("/game", game::router())
}
