//! The generation rule: one board in, the next board out.
//!
//! Each generation is computed from a single consistent view of the input
//! board:
//! - every live cell contributes itself to its 8 toroidal neighbors
//! - a live cell with 2 or 3 contributors survives with its owner
//! - an empty coordinate with exactly 3 contributors births a cell whose
//!   owner is decided by contention between the contributors

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Cell, Coord, GridConfig, Owner};

/// Neighbor counts that keep a live cell alive.
pub const SURVIVAL_COUNTS: [usize; 2] = [2, 3];

/// Neighbor count that births a cell on an empty coordinate.
pub const BIRTH_COUNT: usize = 3;

/// Relative positions of the 8 neighbors.
const OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Owners of the live cells bordering one coordinate (never more than 8).
pub type Contributors = SmallVec<[Owner; 8]>;

/// Rule trait.
///
/// The lifecycle calls `next_board` once per tick and never interprets the
/// rule itself, so alternative rules can be swapped in.
///
/// ## Implementation Notes
///
/// - Must be pure: the same board and grid always yield the same result
/// - Must not produce two cells at one coordinate
pub trait GenerationRule {
    /// Compute the successor of `board` on `grid`.
    fn next_board(&self, board: &Board, grid: &GridConfig) -> Board;
}

/// The two-population Game of Life rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WarOfLivesRule;

impl GenerationRule for WarOfLivesRule {
    fn next_board(&self, board: &Board, grid: &GridConfig) -> Board {
        next_board(board, grid)
    }
}

/// The 8 toroidal neighbors of `coord`.
#[must_use]
pub fn neighbor_coords(coord: Coord, grid: &GridConfig) -> [Coord; 8] {
    OFFSETS.map(|(dx, dy)| grid.wrap(coord.x + dx, coord.y + dy))
}

/// Map every coordinate bordering a live cell to the owners of those cells.
///
/// Keys are packed coordinates (`y * width + x`).
#[must_use]
pub fn aggregate_neighbors(board: &Board, grid: &GridConfig) -> FxHashMap<i32, Contributors> {
    let width = grid.width();
    let mut neighbors: FxHashMap<i32, Contributors> = FxHashMap::default();

    for cell in board.cells() {
        for neighbor in neighbor_coords(cell.coord, grid) {
            neighbors.entry(neighbor.packed(width)).or_default().push(cell.owner);
        }
    }

    neighbors
}

/// Decide who owns a cell born from `contributors`.
///
/// Side A needs a majority of two; side B needs all three. Any other split
/// yields an unowned cell.
#[must_use]
pub fn resolve_owner(contributors: &[Owner]) -> Owner {
    let count_a = contributors.iter().filter(|&&o| o == Owner::SideA).count();
    let count_b = contributors.iter().filter(|&&o| o == Owner::SideB).count();

    if count_a > 1 {
        Owner::SideA
    } else if count_b > 2 {
        Owner::SideB
    } else {
        Owner::Unowned
    }
}

/// Compute the next generation of `board`.
///
/// Cells lying outside the grid are wrapped onto it first.
#[must_use]
pub fn next_board(board: &Board, grid: &GridConfig) -> Board {
    let width = grid.width();
    let mut neighbors = aggregate_neighbors(board, grid);
    let mut next = Board::new();

    // Survival: consume each live cell's own entry so it can't be reborn.
    for cell in board.cells() {
        let coord = grid.wrap(cell.x(), cell.y());
        let count = neighbors.remove(&coord.packed(width)).map_or(0, |owners| owners.len());

        if SURVIVAL_COUNTS.contains(&count) {
            next.add(Cell { coord, owner: cell.owner });
        }
    }

    // Birth: whatever is left is empty on the input board.
    for (key, contributors) in neighbors {
        if contributors.len() == BIRTH_COUNT {
            next.add(Cell {
                coord: Coord::unpack(key, width),
                owner: resolve_owner(&contributors),
            });
        }
    }

    next
}
