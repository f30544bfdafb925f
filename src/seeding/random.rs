//! Random opponent populations.

use tracing::debug;

use super::OpponentSeeder;
use crate::core::{GameRng, GridConfig};
use crate::error::ConfigError;

/// Chance that any given cell of the half board starts alive.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Fills side B's half board at random, one independent stream per level.
///
/// The same base seed always produces the same population for a level,
/// regardless of which levels were generated before it.
///
/// ```
/// use war_of_lives::core::GridConfig;
/// use war_of_lives::seeding::{OpponentSeeder, RandomSeeder};
///
/// let grid = GridConfig::default();
/// let mut first = RandomSeeder::new(7);
/// let mut second = RandomSeeder::new(7);
///
/// assert_eq!(first.opponent_cells(3, &grid), second.opponent_cells(3, &grid));
/// ```
#[derive(Clone, Debug)]
pub struct RandomSeeder {
    rng: GameRng,
    density: f64,
}

impl RandomSeeder {
    /// Create a seeder with the default density.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            density: DEFAULT_DENSITY,
        }
    }

    /// Set the fill density.
    pub fn with_density(mut self, density: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity { density });
        }
        self.density = density;
        Ok(self)
    }

    /// Fill density.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl OpponentSeeder for RandomSeeder {
    fn opponent_cells(&mut self, level: u32, grid: &GridConfig) -> Vec<(i32, i32)> {
        let mut rng = self.rng.for_context(&format!("level-{level}"));
        let mut cells = Vec::new();

        for x in 0..grid.half_width() {
            for y in 0..grid.height() {
                if rng.gen_bool(self.density) {
                    cells.push((x, y));
                }
            }
        }

        debug!(level, count = cells.len(), "generated opponent cells");
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_cells_stay_in_half_board() {
        let grid = GridConfig::new(20, 10).unwrap();
        let mut seeder = RandomSeeder::new(42);

        let cells = seeder.opponent_cells(1, &grid);
        assert!(!cells.is_empty());
        assert!(cells.iter().all(|&c| grid.is_legal_seed(Coord::from(c))));
    }

    #[test]
    fn test_levels_differ() {
        let grid = GridConfig::default();
        let mut seeder = RandomSeeder::new(42);

        assert_ne!(seeder.opponent_cells(1, &grid), seeder.opponent_cells(2, &grid));
    }

    #[test]
    fn test_level_is_reproducible() {
        let grid = GridConfig::default();
        let mut seeder = RandomSeeder::new(42);

        let first = seeder.opponent_cells(4, &grid);
        let _ = seeder.opponent_cells(5, &grid);
        assert_eq!(seeder.opponent_cells(4, &grid), first);
    }

    #[test]
    fn test_density_extremes() {
        let grid = GridConfig::new(8, 4).unwrap();

        let mut empty = RandomSeeder::new(1).with_density(0.0).unwrap();
        assert!(empty.opponent_cells(1, &grid).is_empty());

        let mut full = RandomSeeder::new(1).with_density(1.0).unwrap();
        assert_eq!(full.opponent_cells(1, &grid).len(), 16);
    }

    #[test]
    fn test_invalid_density() {
        assert_eq!(
            RandomSeeder::new(1).with_density(1.5).unwrap_err(),
            ConfigError::InvalidDensity { density: 1.5 }
        );
        assert!(RandomSeeder::new(1).with_density(-0.1).is_err());
        assert!(RandomSeeder::new(1).with_density(f64::NAN).is_err());
    }

    #[test]
    fn test_default_density() {
        assert!((RandomSeeder::new(0).density() - DEFAULT_DENSITY).abs() < f64::EPSILON);
    }
}
