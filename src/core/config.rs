//! Grid configuration.
//!
//! The grid is a fixed rectangle with toroidal wraparound. It is split
//! vertically into two halves: side A seeds the left half
//! (`x < width / 2`) and side B the right half. Dimensions are fixed when a
//! game is constructed and never change afterwards.

use serde::{Deserialize, Serialize};

use super::cell::{Coord, Owner};
use crate::error::ConfigError;

/// Narrowest grid that still has a column for each side.
pub const MIN_WIDTH: i32 = 2;

/// Default grid height (rows), matching the classic board.
pub const DEFAULT_HEIGHT: i32 = 16;

/// Default grid width (columns): two square halves.
pub const DEFAULT_WIDTH: i32 = DEFAULT_HEIGHT * 2;

/// Floor modulo: the result always lies in `0..modulus` for positive
/// `modulus`, including for negative `value`.
///
/// ```
/// use war_of_lives::core::floor_mod;
///
/// assert_eq!(floor_mod(-1, 32), 31);
/// assert_eq!(floor_mod(32, 32), 0);
/// assert_eq!(floor_mod(5, 32), 5);
/// ```
#[must_use]
pub const fn floor_mod(value: i32, modulus: i32) -> i32 {
    ((value % modulus) + modulus) % modulus
}

/// Grid dimensions.
///
/// ## Example
///
/// ```
/// use war_of_lives::core::GridConfig;
///
/// let grid = GridConfig::new(20, 10).unwrap();
/// assert_eq!(grid.half_width(), 10);
/// assert!(GridConfig::new(1, 10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    width: i32,
    height: i32,
}

#[derive(Deserialize)]
struct RawGridConfig {
    width: i32,
    height: i32,
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGridConfig) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Create a validated grid configuration.
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall { width });
        }
        if height < 1 {
            return Err(ConfigError::HeightTooSmall { height });
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::GridTooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    /// Replace the width, revalidating.
    pub fn with_width(self, width: i32) -> Result<Self, ConfigError> {
        Self::new(width, self.height)
    }

    /// Replace the height, revalidating.
    pub fn with_height(self, height: i32) -> Result<Self, ConfigError> {
        Self::new(self.width, height)
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Width of each side's seeding half; also the x offset of side B.
    #[must_use]
    pub const fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Total number of cells.
    #[must_use]
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Check if a half-relative seed coordinate is legal for either side.
    #[must_use]
    pub const fn is_legal_seed(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.half_width() && coord.y >= 0 && coord.y < self.height
    }

    /// Wrap an arbitrary coordinate onto the torus.
    #[must_use]
    pub const fn wrap(&self, x: i32, y: i32) -> Coord {
        Coord::new(floor_mod(x, self.width), floor_mod(y, self.height))
    }

    /// X offset applied to a side's seed coordinates when placed on the board.
    #[must_use]
    pub const fn side_offset(&self, owner: Owner) -> i32 {
        match owner {
            Owner::SideB => self.half_width(),
            Owner::SideA | Owner::Unowned => 0,
        }
    }

    /// Map a half-relative seed coordinate to its board coordinate.
    #[must_use]
    pub const fn to_board(&self, owner: Owner, coord: Coord) -> Coord {
        Coord::new(coord.x + self.side_offset(owner), coord.y)
    }

    /// Map a board coordinate back to the side's own frame, wrapping.
    #[must_use]
    pub const fn to_side(&self, owner: Owner, coord: Coord) -> Coord {
        Coord::new(floor_mod(coord.x - self.side_offset(owner), self.width), coord.y)
    }
}

impl std::fmt::Display for GridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
