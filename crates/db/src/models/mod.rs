//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, for the
//!   catalog tables only. Association rows are created and deleted, never
//!   updated.

pub mod actor;
pub mod genre;
pub mod movie;
pub mod movie_actor;
pub mod movie_genre;
