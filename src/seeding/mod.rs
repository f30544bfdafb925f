//! Opponent seeding for level progression.
//!
//! When side A wins a level, the next level brings a fresh side B
//! population. Where those cells come from is up to an `OpponentSeeder`:
//! - `RandomSeeder`: deterministic random fill of the half board
//! - `PatternSeeder`: a fixed list, for scripted levels and tests
//!
//! Seeders produce half-relative coordinates; the lifecycle filters and
//! offsets them exactly like any other seed.

pub mod random;

pub use random::{RandomSeeder, DEFAULT_DENSITY};

use crate::core::GridConfig;

/// Source of side B cells for a level.
pub trait OpponentSeeder {
    /// Cells for `level`, relative to side B's half of `grid`.
    fn opponent_cells(&mut self, level: u32, grid: &GridConfig) -> Vec<(i32, i32)>;
}

/// Seeds every level with the same cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternSeeder {
    cells: Vec<(i32, i32)>,
}

impl PatternSeeder {
    /// Create a seeder that always returns `cells`.
    pub fn new(cells: impl Into<Vec<(i32, i32)>>) -> Self {
        Self { cells: cells.into() }
    }
}

impl OpponentSeeder for PatternSeeder {
    fn opponent_cells(&mut self, _level: u32, _grid: &GridConfig) -> Vec<(i32, i32)> {
        self.cells.clone()
    }
}
