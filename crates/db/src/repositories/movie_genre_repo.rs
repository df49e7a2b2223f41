//! Repository for the `movie_genres` junction table.

use cinelink_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;
use crate::models::movie::Movie;
use crate::models::movie_genre::{CreateMovieGenre, MovieGenre};

const COLUMNS: &str = "id_movie, id_genre";

/// Provides link operations and lookups between movies and genres.
pub struct MovieGenreRepo;

impl MovieGenreRepo {
    /// Tag a movie with a genre. Returns `None` when the link already exists.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovieGenre,
    ) -> Result<Option<MovieGenre>, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_genres (id_movie, id_genre) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT pk_movie_genres DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MovieGenre>(&query)
            .bind(input.id_movie)
            .bind(input.id_genre)
            .fetch_optional(pool)
            .await
    }

    /// Find one link by its composite key.
    pub async fn find(
        pool: &PgPool,
        id_movie: DbId,
        id_genre: DbId,
    ) -> Result<Option<MovieGenre>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM movie_genres WHERE id_movie = $1 AND id_genre = $2");
        sqlx::query_as::<_, MovieGenre>(&query)
            .bind(id_movie)
            .bind(id_genre)
            .fetch_optional(pool)
            .await
    }

    /// List every link ordered by movie then genre.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieGenre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_genres ORDER BY id_movie, id_genre");
        sqlx::query_as::<_, MovieGenre>(&query).fetch_all(pool).await
    }

    /// Genres of the given movie, alphabetically.
    pub async fn genres_for_movie(pool: &PgPool, id_movie: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.genre
             FROM genres g
             JOIN movie_genres mg ON mg.id_genre = g.id
             WHERE mg.id_movie = $1
             ORDER BY g.genre",
        )
        .bind(id_movie)
        .fetch_all(pool)
        .await
    }

    /// Movies tagged with the given genre, ordered by release year.
    pub async fn movies_for_genre(pool: &PgPool, id_genre: DbId) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.title, m.year
             FROM movies m
             JOIN movie_genres mg ON mg.id_movie = m.id
             WHERE mg.id_genre = $1
             ORDER BY m.year, m.id",
        )
        .bind(id_genre)
        .fetch_all(pool)
        .await
    }

    /// Remove a link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id_movie: DbId, id_genre: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_genres WHERE id_movie = $1 AND id_genre = $2")
            .bind(id_movie)
            .bind(id_genre)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
