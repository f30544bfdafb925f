//! Canonical board snapshots for history and cycle detection.
//!
//! A snapshot is the board's `(coordinate, owner)` pairs sorted by
//! coordinate. Two boards with the same live cells produce equal snapshots
//! no matter the order the cells were inserted in.

use serde::{Deserialize, Serialize};

use super::cells::Board;
use crate::core::{Cell, Coord, Owner};

/// Immutable, order-independent record of a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    entries: Vec<(Coord, Owner)>,
}

impl BoardSnapshot {
    /// Build a snapshot from cells in any order.
    ///
    /// Duplicate coordinates keep the first owner seen.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut entries: Vec<(Coord, Owner)> = cells.into_iter().map(|c| (c.coord, c.owner)).collect();
        // Stable sort so dedup keeps the first occurrence.
        entries.sort_by_key(|&(coord, _)| coord);
        entries.dedup_by_key(|&mut (coord, _)| coord);
        Self { entries }
    }

    /// Number of cells recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted `(coordinate, owner)` pairs.
    #[must_use]
    pub fn entries(&self) -> &[(Coord, Owner)] {
        &self.entries
    }

    /// Number of recorded cells belonging to `owner`.
    #[must_use]
    pub fn count_owned_by(&self, owner: Owner) -> usize {
        self.entries.iter().filter(|&&(_, o)| o == owner).count()
    }

    /// Rebuild a board from this snapshot.
    #[must_use]
    pub fn to_board(&self) -> Board {
        self.entries
            .iter()
            .map(|&(coord, owner)| Cell { coord, owner })
            .collect()
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}
