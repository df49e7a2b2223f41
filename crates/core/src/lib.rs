//! Domain types and pure logic for the cinelink backend.
//!
//! Nothing in this crate touches the database or HTTP layer.

pub mod catalog;
pub mod error;
pub mod game;
pub mod types;
