//! Lifecycle state machine.
//!
//! A small table-driven machine gating which lifecycle transitions are
//! legal. Events with no transition from the current state are ignored.
//!
//! | Event | From | To |
//! |---|---|---|
//! | `Start` | `Init` | `InProgress` |
//! | `SideAWins` | `InProgress` | `SideAWon` |
//! | `SideBWins` | `InProgress` | `SideBWon` |
//! | `Draws` | `InProgress` | `Draw` |
//! | `Restart` | `SideAWon`, `SideBWon`, `Draw` | `Init` |
//! | `NewLevel` | `SideAWon` | `Init` |

use serde::{Deserialize, Serialize};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Seeding; no generations have run.
    #[default]
    Init,
    /// Generations are being computed.
    InProgress,
    /// Only side A has cells left.
    SideAWon,
    /// Only side B has cells left.
    SideBWon,
    /// Both sides survived a cycle, or both died.
    Draw,
}

impl LifecycleState {
    /// Check if the game has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::SideAWon | Self::SideBWon | Self::Draw)
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::InProgress => "in progress",
            Self::SideAWon => "side A won",
            Self::SideBWon => "side B won",
            Self::Draw => "draw",
        };
        f.write_str(name)
    }
}

/// Something that may move the lifecycle to another state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// Begin running generations.
    Start,
    /// Side A eliminated side B.
    SideAWins,
    /// Side B eliminated side A.
    SideBWins,
    /// The game ended without a winner.
    Draws,
    /// Return a finished game to seeding.
    Restart,
    /// Advance to the next level after a side A win.
    NewLevel,
}

impl LifecycleEvent {
    /// The terminal event announcing `state`, if it is terminal.
    #[must_use]
    pub const fn announcing(state: LifecycleState) -> Option<Self> {
        match state {
            LifecycleState::SideAWon => Some(Self::SideAWins),
            LifecycleState::SideBWon => Some(Self::SideBWins),
            LifecycleState::Draw => Some(Self::Draws),
            LifecycleState::Init | LifecycleState::InProgress => None,
        }
    }
}

/// One legal `from -> to` move for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Transition {
    event: LifecycleEvent,
    from: LifecycleState,
    to: LifecycleState,
}

const TRANSITIONS: [Transition; 8] = {
    use LifecycleEvent as E;
    use LifecycleState as S;

    [
        Transition { event: E::Start, from: S::Init, to: S::InProgress },
        Transition { event: E::SideAWins, from: S::InProgress, to: S::SideAWon },
        Transition { event: E::SideBWins, from: S::InProgress, to: S::SideBWon },
        Transition { event: E::Draws, from: S::InProgress, to: S::Draw },
        Transition { event: E::Restart, from: S::SideAWon, to: S::Init },
        Transition { event: E::Restart, from: S::SideBWon, to: S::Init },
        Transition { event: E::Restart, from: S::Draw, to: S::Init },
        Transition { event: E::NewLevel, from: S::SideAWon, to: S::Init },
    ]
};

/// Table-driven lifecycle state machine.
///
/// ```
/// use war_of_lives::lifecycle::{LifecycleEvent, LifecycleState, LifecycleStateMachine};
///
/// let mut machine = LifecycleStateMachine::new();
/// assert_eq!(machine.fire(LifecycleEvent::Start), LifecycleState::InProgress);
///
/// // No transition: ignored
/// assert_eq!(machine.fire(LifecycleEvent::Restart), LifecycleState::InProgress);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifecycleStateMachine {
    current: LifecycleState,
}

impl LifecycleStateMachine {
    /// Create a machine in `Init`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LifecycleState {
        self.current
    }

    /// Check if the current state is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Target state of `event` from the current state, if any.
    #[must_use]
    pub fn target(&self, event: LifecycleEvent) -> Option<LifecycleState> {
        TRANSITIONS
            .iter()
            .find(|t| t.event == event && t.from == self.current)
            .map(|t| t.to)
    }

    /// Check if `event` has a transition from the current state.
    #[must_use]
    pub fn can_fire(&self, event: LifecycleEvent) -> bool {
        self.target(event).is_some()
    }

    /// Apply `event`, returning the resulting state.
    ///
    /// Unmatched events leave the state unchanged.
    pub fn fire(&mut self, event: LifecycleEvent) -> LifecycleState {
        if let Some(to) = self.target(event) {
            self.current = to;
        }
        self.current
    }
}
