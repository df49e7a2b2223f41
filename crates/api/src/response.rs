//! Shared response envelope types for API handlers.
//!
//! Collection listings use a `{ "message": ..., "data": [...] }` envelope,
//! which is what the game client unpacks. Single records and relation
//! lookups are returned bare.

use serde::Serialize;

/// Standard `{ "message": "All Actors", "data": [...] }` listing envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ListResponse::new("All Actors", actors)))
/// ```
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub message: &'static str,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>) -> Self {
        Self { message, data }
    }
}
