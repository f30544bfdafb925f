//! Cells, coordinates and ownership.
//!
//! ## Owner
//!
//! Every live cell belongs to one of the two sides, or to nobody when a
//! birth could not be attributed.
//!
//! ## Cell
//!
//! A coordinate plus an owner. Identity is the coordinate alone: two cells
//! at the same position are equal regardless of who owns them.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Owner of a live cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Born from a contested neighborhood; counts for neither side.
    Unowned,
    /// The first side (the player, left half of the board).
    SideA,
    /// The second side (the opponent, right half of the board).
    SideB,
}

impl Owner {
    /// Both competing sides, in order.
    pub const SIDES: [Owner; 2] = [Owner::SideA, Owner::SideB];

    /// Check if this owner is one of the two competing sides.
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, Owner::SideA | Owner::SideB)
    }

    /// The opposing side. `Unowned` has no opponent.
    #[must_use]
    pub const fn opponent(self) -> Option<Owner> {
        match self {
            Owner::SideA => Some(Owner::SideB),
            Owner::SideB => Some(Owner::SideA),
            Owner::Unowned => None,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Unowned => write!(f, "Unowned"),
            Owner::SideA => write!(f, "Side A"),
            Owner::SideB => write!(f, "Side B"),
        }
    }
}

/// Grid coordinate.
///
/// Ordered by row, then column, so iterating a board walks it like text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, `0..width`.
    pub x: i32,
    /// Row, `0..height`.
    pub y: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack into a single integer key for a grid of the given width.
    ///
    /// Only meaningful for coordinates already inside the grid.
    #[must_use]
    pub const fn packed(self, width: i32) -> i32 {
        self.y * width + self.x
    }

    /// Inverse of [`Coord::packed`].
    #[must_use]
    pub const fn unpack(key: i32, width: i32) -> Self {
        Self {
            x: key % width,
            y: key / width,
        }
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i32, i32) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A live cell: position plus owner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell lives.
    pub coord: Coord,
    /// Who the cell belongs to.
    pub owner: Owner,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i32, y: i32, owner: Owner) -> Self {
        Self {
            coord: Coord::new(x, y),
            owner,
        }
    }

    /// Column.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.coord.x
    }

    /// Row.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.coord.y
    }
}

// Identity is positional; the owner is payload.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_cell_equality_ignores_owner() {
        let a = Cell::new(3, 4, Owner::SideA);
        let b = Cell::new(3, 4, Owner::SideB);
        let c = Cell::new(4, 3, Owner::SideA);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = FxHashSet::default();
        set.insert(a);
        assert!(!set.insert(b));
        assert!(set.insert(c));
    }

    #[test]
    fn test_coord_packing() {
        let width = 32;
        let coord = Coord::new(7, 5);

        assert_eq!(coord.packed(width), 5 * 32 + 7);
        assert_eq!(Coord::unpack(coord.packed(width), width), coord);
        assert_eq!(Coord::unpack(0, width), Coord::new(0, 0));
    }

    #[test]
    fn test_coord_ordering_is_row_major() {
        let mut coords = vec![Coord::new(2, 1), Coord::new(0, 2), Coord::new(5, 0), Coord::new(1, 1)];
        coords.sort();

        assert_eq!(
            coords,
            vec![Coord::new(5, 0), Coord::new(1, 1), Coord::new(2, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_owner_helpers() {
        assert!(Owner::SideA.is_side());
        assert!(Owner::SideB.is_side());
        assert!(!Owner::Unowned.is_side());

        assert_eq!(Owner::SideA.opponent(), Some(Owner::SideB));
        assert_eq!(Owner::SideB.opponent(), Some(Owner::SideA));
        assert_eq!(Owner::Unowned.opponent(), None);

        assert_eq!(format!("{}", Owner::SideB), "Side B");
    }

    #[test]
    fn test_coord_tuple_conversion() {
        let coord: Coord = (9, 2).into();
        assert_eq!(coord, Coord::new(9, 2));

        let tuple: (i32, i32) = coord.into();
        assert_eq!(tuple, (9, 2));
        assert_eq!(format!("{}", coord), "(9, 2)");
    }
}
