//! HTTP-level integration tests for the actor, movie and genre collections.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Actors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_actor_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/actors", json!({"name": "Keanu Reeves"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Keanu Reeves");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_actors_uses_message_envelope(pool: PgPool) {
    common::create_actor(&pool, "Brad Pitt").await;
    common::create_actor(&pool, "Emma Stone").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "All Actors");
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Brad Pitt");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_actors_on_empty_table_is_200(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_actor_by_id(pool: PgPool) {
    let id = common::create_actor(&pool, "Tom Hardy").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/actors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Tom Hardy");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_actor_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Actor with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_actor_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_actor_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/actors", json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_random_actor_on_empty_table_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/actors/random").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_random_actor_returns_a_bare_record(pool: PgPool) {
    let id = common::create_actor(&pool, "Uma Thurman").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/actors/random").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Uma Thurman");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_actor(pool: PgPool) {
    let id = common::create_actor(&pool, "Ellen Page").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/actors/{id}"), json!({"name": "Elliot Page"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Elliot Page");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/actors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/actors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/actors/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_list_movies(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies", json!({"title": "Inception", "year": 2010})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["year"], 2010);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/movies").await).await;
    assert_eq!(json["message"], "All Movies");
    assert_eq!(json["data"][0]["title"], "Inception");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_year_out_of_range_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", json!({"title": "Future", "year": 3000})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_missing_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies", json!({"title": "No Year"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_random_movie(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/movies/random").await.status(), StatusCode::NOT_FOUND);

    let id = common::create_movie(&pool, "The Matrix", 1999).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/movies/random").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_movie_update(pool: PgPool) {
    let id = common::create_movie(&pool, "Interstellar", 2013).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/movies/{id}"), json!({"year": 2014})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Interstellar");
    assert_eq!(json["year"], 2014);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_movie_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/movies/999999", json!({"title": "Ghost"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genre_crud(pool: PgPool) {
    let id = common::create_genre(&pool, "Drama").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/genres").await).await;
    assert_eq!(json["message"], "All Genres");
    assert_eq!(json["data"][0]["genre"], "Drama");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/genres/{id}"), json!({"genre": "Comedy"})).await;
    assert_eq!(body_json(response).await["genre"], "Comedy");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_genre_returns_409(pool: PgPool) {
    common::create_genre(&pool, "Horror").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/genres", json!({"genre": "Horror"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_renaming_genre_onto_existing_label_returns_409(pool: PgPool) {
    common::create_genre(&pool, "Action").await;
    let id = common::create_genre(&pool, "Adventure").await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/genres/{id}"), json!({"genre": "Action"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
