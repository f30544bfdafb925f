//! Generation rules.
//!
//! `GenerationRule` is the seam between the lifecycle and the evolution
//! algorithm. `WarOfLivesRule` implements the two-population rule:
//! - Survival with 2 or 3 neighbors
//! - Birth with exactly 3 neighbors
//! - Ownership of births decided by neighbor contention
//!
//! The lifecycle calls into `GenerationRule` but never interprets cells
//! itself.

pub mod engine;

pub use engine::{
    aggregate_neighbors, neighbor_coords, next_board, resolve_owner, Contributors, GenerationRule,
    WarOfLivesRule, BIRTH_COUNT, SURVIVAL_COUNTS,
};
