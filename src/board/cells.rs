//! The set of live cells on the grid.
//!
//! A `Board` holds at most one cell per coordinate. It is backed by an
//! `im` ordered map, so cloning is O(1) and iteration always walks the
//! cells in row-major order regardless of how they were inserted.

use im::OrdMap;

use super::snapshot::BoardSnapshot;
use crate::core::{Cell, Coord, Owner};

/// Live cells keyed by coordinate.
///
/// ## Usage
///
/// ```
/// use war_of_lives::board::Board;
/// use war_of_lives::core::{Cell, Owner};
///
/// let mut board = Board::new();
/// assert!(board.add(Cell::new(1, 2, Owner::SideA)));
///
/// // Occupied coordinates reject a second cell
/// assert!(!board.add(Cell::new(1, 2, Owner::SideB)));
///
/// assert!(board.contains(1, 2));
/// assert_eq!(board.cells_owned_by(Owner::SideA).len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: OrdMap<Coord, Owner>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from cells. Later cells at an occupied coordinate are dropped.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut board = Self::new();
        for cell in cells {
            board.add(cell);
        }
        board
    }

    /// Check if a live cell occupies `(x, y)`.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cells.contains_key(&Coord::new(x, y))
    }

    /// Get the cell at `(x, y)`.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let coord = Coord::new(x, y);
        self.cells.get(&coord).map(|&owner| Cell { coord, owner })
    }

    /// Get the owner of the cell at `coord`.
    #[must_use]
    pub fn owner_at(&self, coord: Coord) -> Option<Owner> {
        self.cells.get(&coord).copied()
    }

    /// Insert a cell.
    ///
    /// Returns `false` without modifying the board if the coordinate is
    /// already occupied.
    pub fn add(&mut self, cell: Cell) -> bool {
        if self.cells.contains_key(&cell.coord) {
            return false;
        }
        self.cells.insert(cell.coord, cell.owner);
        true
    }

    /// Remove the cell at `(x, y)`, returning it if there was one.
    pub fn remove(&mut self, x: i32, y: i32) -> Option<Cell> {
        let coord = Coord::new(x, y);
        self.cells.remove(&coord).map(|owner| Cell { coord, owner })
    }

    /// Remove the cell at `(x, y)` if present, otherwise add one for `owner`.
    ///
    /// Returns `true` if the coordinate is occupied afterwards.
    pub fn toggle_at(&mut self, x: i32, y: i32, owner: Owner) -> bool {
        if self.remove(x, y).is_some() {
            false
        } else {
            self.add(Cell::new(x, y, owner))
        }
    }

    /// Coordinates of every cell belonging to `owner`.
    #[must_use]
    pub fn cells_owned_by(&self, owner: Owner) -> Vec<Coord> {
        self.cells
            .iter()
            .filter(|&(_, &o)| o == owner)
            .map(|(&coord, _)| coord)
            .collect()
    }

    /// Number of cells belonging to `owner`.
    #[must_use]
    pub fn count_owned_by(&self, owner: Owner) -> usize {
        self.cells.values().filter(|&&o| o == owner).count()
    }

    /// Iterate over all live cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(|(&coord, &owner)| Cell { coord, owner })
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Capture the board as a canonical, order-independent snapshot.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_cells(self.cells())
    }
}

impl FromIterator<Cell> for Board {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}
