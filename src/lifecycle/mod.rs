//! Game lifecycle and its state machine.
//!
//! - `LifecycleStateMachine`: which transitions are legal
//! - `GameLifecycle`: owns the board and history, drives generations and
//!   decides when and how a game ends

pub mod game;
pub mod machine;

pub use game::GameLifecycle;
pub use machine::{LifecycleEvent, LifecycleState, LifecycleStateMachine};
