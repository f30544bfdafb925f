//! Core value types: cells, owners, grid configuration, RNG.
//!
//! Everything above this module (boards, rules, lifecycle) is built from
//! these plain values.

pub mod cell;
pub mod config;
pub mod rng;

pub use cell::{Cell, Coord, Owner};
pub use config::{floor_mod, GridConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_WIDTH};
pub use rng::GameRng;
