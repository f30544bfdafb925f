//! Boards of live cells and their canonical snapshots.

pub mod cells;
pub mod snapshot;

pub use cells::Board;
pub use snapshot::BoardSnapshot;
