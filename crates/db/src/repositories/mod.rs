//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod genre_repo;
pub mod movie_actor_repo;
pub mod movie_genre_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use genre_repo::GenreRepo;
pub use movie_actor_repo::MovieActorRepo;
pub use movie_genre_repo::MovieGenreRepo;
pub use movie_repo::MovieRepo;
