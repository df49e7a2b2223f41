//! Repository for the `movie_actors` junction table.
//!
//! Besides raw link CRUD, provides the two cast lookups the game client
//! relies on: movies of an actor and actors of a movie.

use cinelink_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::Actor;
use crate::models::movie::Movie;
use crate::models::movie_actor::{CreateMovieActor, MovieActor};

const COLUMNS: &str = "id_movie, id_actor";

/// Provides link operations and cast lookups for movies and actors.
pub struct MovieActorRepo;

impl MovieActorRepo {
    /// Link an actor to a movie.
    ///
    /// Returns `None` when the link already exists. A missing movie or actor
    /// surfaces as a foreign-key violation from the database.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieActor,
    ) -> Result<Option<MovieActor>, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_actors (id_movie, id_actor) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT pk_movie_actors DO NOTHING
             RETURNING {COLUMNS}"
        );
        let link = sqlx::query_as::<_, MovieActor>(&query)
            .bind(input.id_movie)
            .bind(input.id_actor)
            .fetch_optional(pool)
            .await?;

        if link.is_none() {
            tracing::debug!(
                id_movie = input.id_movie,
                id_actor = input.id_actor,
                "Movie-actor link already present"
            );
        }
        Ok(link)
    }

    /// Find one link by its composite key.
    pub async fn find(
        pool: &PgPool,
        id_movie: DbId,
        id_actor: DbId,
    ) -> Result<Option<MovieActor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movie_actors WHERE id_movie = $1 AND id_actor = $2");
        sqlx::query_as::<_, MovieActor>(&query)
            .bind(id_movie)
            .bind(id_actor)
            .fetch_optional(pool)
            .await
    }

    /// Whether the actor is part of the movie's cast.
    pub async fn exists(pool: &PgPool, id_movie: DbId, id_actor: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM movie_actors WHERE id_movie = $1 AND id_actor = $2)",
        )
        .bind(id_movie)
        .bind(id_actor)
        .fetch_one(pool)
        .await
    }

    /// List every link ordered by movie then actor.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieActor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_actors ORDER BY id_movie, id_actor");
        sqlx::query_as::<_, MovieActor>(&query).fetch_all(pool).await
    }

    /// Movies the given actor appears in, ordered by release year.
    pub async fn movies_for_actor(pool: &PgPool, id_actor: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.title, m.year
             FROM movies m
             JOIN movie_actors ma ON ma.id_movie = m.id
             WHERE ma.id_actor = $1
             ORDER BY m.year, m.id",
        )
        .bind(id_actor)
        .fetch_all(pool)
        .await
    }

    /// Cast of the given movie, ordered by actor ID.
    pub async fn actors_for_movie(pool: &PgPool, id_movie: DbId) -> Result<Vec<Actor>, sqlx::Error> {
        sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.name
             FROM actors a
             JOIN movie_actors ma ON ma.id_actor = a.id
             WHERE ma.id_movie = $1
             ORDER BY a.id",
        )
        .bind(id_movie)
        .fetch_all(pool)
        .await
    }

    /// Remove a link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id_movie: DbId, id_actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_actors WHERE id_movie = $1 AND id_actor = $2")
            .bind(id_movie)
            .bind(id_actor)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
