//! # war-of-lives
//!
//! A two-population variant of Conway's Game of Life on a toroidal grid.
//!
//! Two sides seed cells on their own half of the board. Each generation
//! applies the classic survival and birth rules; newborn cells are claimed
//! by whichever side dominates their neighborhood. The game ends when a
//! side is wiped out or the board repeats a configuration it has already
//! shown.
//!
//! ## Design Principles
//!
//! 1. **Pure generations**: `next_board` maps a board to its successor with
//!    no side effects, evaluated against one consistent input.
//!
//! 2. **Caller owns the clock**: the lifecycle exposes `tick`/`step` as plain
//!    calls. Scheduling, rendering and input belong to the caller.
//!
//! 3. **Forgiving inputs**: bad seeds are filtered, illegal events ignored.
//!    Only configuration can fail.
//!
//! ## Modules
//!
//! - `core`: Cells, owners, coordinates, grid configuration, RNG
//! - `board`: Boards of live cells and canonical snapshots
//! - `rules`: The generation rule
//! - `lifecycle`: State machine and game lifecycle
//! - `seeding`: Opponent populations for level progression
//! - `error`: Configuration errors

pub mod board;
pub mod core;
pub mod error;
pub mod lifecycle;
pub mod rules;
pub mod seeding;

// Re-export commonly used types
pub use crate::core::{floor_mod, Cell, Coord, GameRng, GridConfig, Owner};

pub use crate::board::{Board, BoardSnapshot};

pub use crate::rules::{next_board, GenerationRule, WarOfLivesRule};

pub use crate::lifecycle::{GameLifecycle, LifecycleEvent, LifecycleState, LifecycleStateMachine};

pub use crate::seeding::{OpponentSeeder, PatternSeeder, RandomSeeder};

pub use crate::error::ConfigError;
