//! Configuration errors.
//!
//! Running a game never fails: bad seeds are filtered and illegal events
//! are ignored. The only fallible surface is building the configuration
//! a game runs on.

use derive_more::{Display, Error};

/// Rejected grid or seeder configuration.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ConfigError {
    /// The grid is too narrow to split into two halves.
    #[display("grid width {width} is below the minimum of {}", crate::core::config::MIN_WIDTH)]
    WidthTooSmall {
        /// Requested width.
        width: i32,
    },

    /// The grid has no rows.
    #[display("grid height {height} is below the minimum of 1")]
    HeightTooSmall {
        /// Requested height.
        height: i32,
    },

    /// `width * height` does not fit the packed coordinate key.
    #[display("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// Seeding density must be a probability.
    #[display("seeding density {density} is outside [0, 1]")]
    InvalidDensity {
        /// Requested density.
        density: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::WidthTooSmall { width: 1 }.to_string(),
            "grid width 1 is below the minimum of 2"
        );
        assert_eq!(
            ConfigError::HeightTooSmall { height: 0 }.to_string(),
            "grid height 0 is below the minimum of 1"
        );
        assert_eq!(
            ConfigError::GridTooLarge { width: 70000, height: 70000 }.to_string(),
            "grid of 70000x70000 cells is too large"
        );
        assert_eq!(
            ConfigError::InvalidDensity { density: 1.5 }.to_string(),
            "seeding density 1.5 is outside [0, 1]"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ConfigError::HeightTooSmall { height: -3 });
    }
}
