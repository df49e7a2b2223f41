//! Scoring for the movie/actor association game.
//!
//! A player drops an actor card onto a movie node. The drop is correct when
//! the actor is part of the movie's cast.

use serde::Serialize;

/// Points awarded for a correct actor-to-movie association.
pub const POINTS_PER_MATCH: u32 = 10;

/// Outcome of checking one actor-to-movie drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    pub points: u32,
}

impl Verdict {
    /// Build the verdict for a drop, given whether the cast link exists.
    pub fn for_link(linked: bool) -> Self {
        Self {
            correct: linked,
            points: if linked { POINTS_PER_MATCH } else { 0 },
        }
    }
}
