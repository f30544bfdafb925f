//! Game lifecycle: seeding, stepping, termination.
//!
//! `GameLifecycle` owns the current board, the history of every board seen
//! during the run, and the state machine. The caller owns the clock: it
//! calls [`GameLifecycle::tick`] (or [`GameLifecycle::step`]) whenever it
//! wants the next generation, and stops once the game is over. Ticks that
//! arrive outside `InProgress` are ignored.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, trace};

use super::machine::{LifecycleEvent, LifecycleState, LifecycleStateMachine};
use crate::board::{Board, BoardSnapshot};
use crate::core::{Cell, Coord, GridConfig, Owner};
use crate::rules::{GenerationRule, WarOfLivesRule};
use crate::seeding::OpponentSeeder;

/// A single War of Lives game on a fixed grid.
///
/// ## Example
///
/// ```
/// use war_of_lives::core::GridConfig;
/// use war_of_lives::lifecycle::{GameLifecycle, LifecycleState};
///
/// let mut game = GameLifecycle::new(GridConfig::new(16, 8).unwrap());
///
/// // Side A: a stable block. Side B: a lone cell that starves.
/// game.seed(&[(1, 1), (2, 1), (1, 2), (2, 2)], &[(3, 4)]);
/// game.start();
///
/// assert_eq!(game.step(), LifecycleState::SideAWon);
/// ```
#[derive(Clone, Debug)]
pub struct GameLifecycle<R = WarOfLivesRule> {
    grid: GridConfig,
    rule: R,
    machine: LifecycleStateMachine,
    board: Board,
    /// Every board seen this run, in order.
    history: Vector<BoardSnapshot>,
    /// Membership index over `history`.
    seen: FxHashSet<BoardSnapshot>,
    /// Half-relative seed cells per side.
    initial_a: Vec<Coord>,
    initial_b: Vec<Coord>,
    level: u32,
    generation: u32,
}

impl GameLifecycle<WarOfLivesRule> {
    /// Create a game on `grid` with the standard rule.
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        Self::with_rule(grid, WarOfLivesRule)
    }
}

impl<R: GenerationRule> GameLifecycle<R> {
    /// Create a game on `grid` driven by `rule`.
    ///
    /// The game starts in `Init` at level 1 with an empty board.
    #[must_use]
    pub fn with_rule(grid: GridConfig, rule: R) -> Self {
        let mut game = Self {
            grid,
            rule,
            machine: LifecycleStateMachine::new(),
            board: Board::new(),
            history: Vector::new(),
            seen: FxHashSet::default(),
            initial_a: Vec::new(),
            initial_b: Vec::new(),
            level: 1,
            generation: 0,
        };
        game.rebuild();
        game
    }

    // === Accessors ===

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.machine.state()
    }

    /// Grid the game runs on.
    #[must_use]
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current level, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Generations computed since the last seed.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of snapshots recorded this run.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Recorded snapshots, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &BoardSnapshot> {
        self.history.iter()
    }

    /// Seed cells for a side, relative to that side's half.
    #[must_use]
    pub fn initial_cells(&self, owner: Owner) -> &[Coord] {
        match owner {
            Owner::SideA => &self.initial_a,
            Owner::SideB => &self.initial_b,
            Owner::Unowned => &[],
        }
    }

    /// Live cells of `owner` in that side's own frame.
    ///
    /// Side B's coordinates are shifted back by half the grid width,
    /// wrapping around for cells that have drifted into the left half.
    #[must_use]
    pub fn cells_owned_by(&self, owner: Owner) -> Vec<(i32, i32)> {
        self.board
            .cells_owned_by(owner)
            .into_iter()
            .map(|coord| self.grid.to_side(owner, coord).into())
            .collect()
    }

    // === Seeding ===

    /// Replace both sides' seed cells and rebuild the board.
    ///
    /// Coordinates are relative to each side's half: `0 <= x < width / 2`,
    /// `0 <= y < height`. Anything else is dropped, as are repeats. Only
    /// allowed in `Init`.
    #[instrument(skip_all, fields(a = cells_a.len(), b = cells_b.len()))]
    pub fn seed(&mut self, cells_a: &[(i32, i32)], cells_b: &[(i32, i32)]) {
        if self.state() != LifecycleState::Init {
            debug!(state = %self.state(), "seed ignored outside init");
            return;
        }

        self.initial_a = self.legal_seeds(cells_a);
        self.initial_b = self.legal_seeds(cells_b);
        self.rebuild();

        debug!(
            a = self.initial_a.len(),
            b = self.initial_b.len(),
            "seeded board"
        );
    }

    /// Toggle one of side A's seed cells.
    ///
    /// Returns `true` if the cell is seeded afterwards. Illegal
    /// coordinates and calls outside `Init` change nothing.
    pub fn toggle_seed_cell(&mut self, x: i32, y: i32) -> bool {
        let coord = Coord::new(x, y);
        if self.state() != LifecycleState::Init || !self.grid.is_legal_seed(coord) {
            return self.initial_a.contains(&coord);
        }

        let seeded = if let Some(pos) = self.initial_a.iter().position(|&c| c == coord) {
            self.initial_a.remove(pos);
            false
        } else {
            self.initial_a.push(coord);
            true
        };
        self.rebuild();
        seeded
    }

    /// Remove all of a side's seed cells. Only allowed in `Init`.
    pub fn clear_seed(&mut self, owner: Owner) {
        if self.state() != LifecycleState::Init {
            return;
        }

        match owner {
            Owner::SideA => self.initial_a.clear(),
            Owner::SideB => self.initial_b.clear(),
            Owner::Unowned => return,
        }
        self.rebuild();
    }

    // === Running ===

    /// Begin running generations.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> LifecycleState {
        self.transition(LifecycleEvent::Start)
    }

    /// Compute one generation.
    ///
    /// Records the current board in history, then replaces it with its
    /// successor. Ignored unless the game is `InProgress`.
    pub fn tick(&mut self) {
        if self.state() != LifecycleState::InProgress {
            trace!(state = %self.state(), "tick ignored");
            return;
        }

        let snapshot = self.board.snapshot();
        self.history.push_back(snapshot.clone());
        self.seen.insert(snapshot);

        self.board = self.rule.next_board(&self.board, &self.grid);
        self.generation += 1;

        trace!(
            generation = self.generation,
            a = self.board.count_owned_by(Owner::SideA),
            b = self.board.count_owned_by(Owner::SideB),
            unowned = self.board.count_owned_by(Owner::Unowned),
            "generation computed"
        );
    }

    /// Check if the current board ends the game.
    ///
    /// True when either side has no cells left, or when the current board
    /// already occurred earlier in this run.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.count_owned_by(Owner::SideA) == 0
            || self.board.count_owned_by(Owner::SideB) == 0
            || self.seen.contains(&self.board.snapshot())
    }

    /// Result implied by the current board.
    ///
    /// `Draw` when both sides have cells or neither does; otherwise the
    /// side that still has cells wins.
    #[must_use]
    pub fn winner(&self) -> LifecycleState {
        let a = self.board.count_owned_by(Owner::SideA);
        let b = self.board.count_owned_by(Owner::SideB);

        match (a > 0, b > 0) {
            (true, false) => LifecycleState::SideAWon,
            (false, true) => LifecycleState::SideBWon,
            (true, true) | (false, false) => LifecycleState::Draw,
        }
    }

    /// Tick once and settle the outcome if the game just ended.
    ///
    /// Returns the state afterwards. Does nothing unless `InProgress`.
    pub fn step(&mut self) -> LifecycleState {
        if self.state() != LifecycleState::InProgress {
            return self.state();
        }

        self.tick();

        if self.is_over() {
            let result = self.winner();
            if let Some(event) = LifecycleEvent::announcing(result) {
                self.transition(event);
            }
        }

        self.state()
    }

    /// Start the game and step until it ends or `max_generations` is reached.
    ///
    /// Hitting the cap leaves the game `InProgress`.
    #[instrument(skip(self))]
    pub fn run(&mut self, max_generations: u32) -> LifecycleState {
        self.start();

        while self.state() == LifecycleState::InProgress && self.generation < max_generations {
            self.step();
        }

        debug!(generation = self.generation, state = %self.state(), "run stopped");
        self.state()
    }

    // === Resetting ===

    /// Return a finished game to `Init` with its original seed.
    ///
    /// Does nothing unless the game has finished.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if !self.machine.can_fire(LifecycleEvent::Restart) {
            debug!(state = %self.state(), "restart ignored");
            return;
        }

        self.rebuild();
        self.transition(LifecycleEvent::Restart);
    }

    /// Advance to the next level after a side A win.
    ///
    /// Side A keeps its seed; side B is reseeded from `seeder`. Returns
    /// `false` and changes nothing unless side A won.
    #[instrument(skip(self, seeder))]
    pub fn new_level(&mut self, seeder: &mut impl OpponentSeeder) -> bool {
        if !self.machine.can_fire(LifecycleEvent::NewLevel) {
            debug!(state = %self.state(), "new level requires a side A win");
            return false;
        }

        self.level += 1;
        let cells = seeder.opponent_cells(self.level, &self.grid);
        self.initial_b = self.legal_seeds(&cells);
        self.rebuild();
        self.transition(LifecycleEvent::NewLevel);

        debug!(level = self.level, b = self.initial_b.len(), "advanced level");
        true
    }

    // === Internals ===

    fn transition(&mut self, event: LifecycleEvent) -> LifecycleState {
        let from = self.state();
        let to = self.machine.fire(event);

        if from == to {
            debug!(?event, state = %from, "event ignored");
        } else {
            debug!(?event, %from, %to, generation = self.generation, "state changed");
        }
        to
    }

    /// In-range seeds, first occurrence only, in input order.
    fn legal_seeds(&self, cells: &[(i32, i32)]) -> Vec<Coord> {
        let mut kept: Vec<Coord> = Vec::with_capacity(cells.len());
        for &cell in cells {
            let coord = Coord::from(cell);
            if self.grid.is_legal_seed(coord) && !kept.contains(&coord) {
                kept.push(coord);
            }
        }
        kept
    }

    /// Rebuild the board from the seed cells and start a fresh history.
    fn rebuild(&mut self) {
        let a = self.initial_a.iter().map(|&c| (Owner::SideA, c));
        let b = self.initial_b.iter().map(|&c| (Owner::SideB, c));

        self.board = a
            .chain(b)
            .map(|(owner, c)| Cell {
                coord: self.grid.to_board(owner, c),
                owner,
            })
            .collect();

        let snapshot = self.board.snapshot();
        self.history = Vector::unit(snapshot.clone());
        self.seen = std::iter::once(snapshot).collect();
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::PatternSeeder;

    const BLOCK: [(i32, i32); 4] = [(1, 1), (2, 1), (1, 2), (2, 2)];

    fn game() -> GameLifecycle {
        GameLifecycle::new(GridConfig::new(16, 8).unwrap())
    }

    fn won_by_a() -> GameLifecycle {
        let mut game = game();
        game.seed(&BLOCK, &[(3, 4)]);
        game.start();
        game.step();
        assert_eq!(game.state(), LifecycleState::SideAWon);
        game
    }

    #[test]
    fn test_new_game() {
        let game = game();

        assert_eq!(game.state(), LifecycleState::Init);
        assert_eq!(game.level(), 1);
        assert_eq!(game.generation(), 0);
        assert!(game.board().is_empty());
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_seed_filters_and_offsets() {
        let mut game = game();
        game.seed(
            &[(-1, 0), (8, 0), (0, 8), (7, 7), (0, 0), (0, 0)],
            &[(0, 0), (7, 7), (8, 1)],
        );

        assert_eq!(game.initial_cells(Owner::SideA), &[Coord::new(7, 7), Coord::new(0, 0)]);
        assert_eq!(game.initial_cells(Owner::SideB), &[Coord::new(0, 0), Coord::new(7, 7)]);
        assert!(game.initial_cells(Owner::Unowned).is_empty());

        let board = game.board();
        assert_eq!(board.len(), 4);
        assert_eq!(board.owner_at(Coord::new(0, 0)), Some(Owner::SideA));
        assert_eq!(board.owner_at(Coord::new(8, 0)), Some(Owner::SideB));
        assert_eq!(board.owner_at(Coord::new(15, 7)), Some(Owner::SideB));

        assert_eq!(game.cells_owned_by(Owner::SideB), vec![(0, 0), (7, 7)]);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_tick_ignored_before_start() {
        let mut game = game();
        game.seed(&BLOCK, &[(3, 4)]);
        let before = game.board().clone();

        game.tick();

        assert_eq!(game.board(), &before);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_tick_records_history() {
        let mut game = game();
        game.seed(&BLOCK, &[(3, 4)]);
        let initial = game.board().snapshot();
        game.start();

        game.tick();

        assert_eq!(game.generation(), 1);
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.history().last(), Some(&initial));
        assert_eq!(game.board().count_owned_by(Owner::SideB), 0);
    }

    #[test]
    fn test_side_a_wins() {
        let game = won_by_a();

        assert!(game.is_over());
        assert_eq!(game.winner(), LifecycleState::SideAWon);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_side_b_wins() {
        let mut game = game();
        game.seed(&[(3, 4)], &BLOCK);

        assert_eq!(game.run(10), LifecycleState::SideBWon);
    }

    #[test]
    fn test_mutual_extinction_is_draw() {
        let mut game = game();
        game.seed(&[(3, 4)], &[(3, 4)]);

        assert_eq!(game.run(10), LifecycleState::Draw);
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_still_life_is_a_cycle() {
        let mut game = game();
        game.seed(&BLOCK, &BLOCK);

        assert_eq!(game.run(10), LifecycleState::Draw);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_tick_ignored_after_end() {
        let mut game = won_by_a();
        let board = game.board().clone();
        let history = game.history_len();

        game.tick();
        assert_eq!(game.step(), LifecycleState::SideAWon);

        assert_eq!(game.board(), &board);
        assert_eq!(game.history_len(), history);
    }

    #[test]
    fn test_seed_ignored_outside_init() {
        let mut game = won_by_a();
        let board = game.board().clone();

        game.seed(&[(0, 0)], &[(0, 0)]);

        assert_eq!(game.board(), &board);
        assert_eq!(game.initial_cells(Owner::SideA).len(), 4);
    }

    #[test]
    fn test_restart_restores_seed() {
        let mut game = won_by_a();

        game.restart();

        assert_eq!(game.state(), LifecycleState::Init);
        assert_eq!(game.board().count_owned_by(Owner::SideA), 4);
        assert_eq!(game.board().count_owned_by(Owner::SideB), 1);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_restart_in_init_is_noop() {
        let mut game = game();
        game.seed(&BLOCK, &[(3, 4)]);
        let board = game.board().clone();

        game.restart();

        assert_eq!(game.state(), LifecycleState::Init);
        assert_eq!(game.board(), &board);
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_restart_mid_run_is_ignored() {
        let mut game = game();
        game.seed(&[(1, 3), (2, 3), (3, 3)], &[(1, 3), (2, 3), (3, 3)]);
        game.start();
        game.step();

        game.restart();

        assert_eq!(game.state(), LifecycleState::InProgress);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_toggle_seed_cell() {
        let mut game = game();

        assert!(game.toggle_seed_cell(2, 3));
        assert!(game.board().contains(2, 3));

        assert!(!game.toggle_seed_cell(2, 3));
        assert!(game.board().is_empty());

        // Right half belongs to side B
        assert!(!game.toggle_seed_cell(9, 3));
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_toggle_ignored_after_start() {
        let mut game = game();
        game.toggle_seed_cell(2, 3);
        game.start();

        assert!(game.toggle_seed_cell(2, 3));
        assert_eq!(game.initial_cells(Owner::SideA), &[Coord::new(2, 3)]);
    }

    #[test]
    fn test_clear_seed() {
        let mut game = game();
        game.seed(&BLOCK, &[(3, 4)]);

        game.clear_seed(Owner::SideB);

        assert_eq!(game.board().count_owned_by(Owner::SideB), 0);
        assert_eq!(game.board().count_owned_by(Owner::SideA), 4);
        assert!(game.initial_cells(Owner::SideB).is_empty());
    }

    #[test]
    fn test_new_level() {
        let mut game = won_by_a();
        let mut seeder = PatternSeeder::new([(5, 5), (6, 5), (5, 6), (6, 6), (20, 20)]);

        assert!(game.new_level(&mut seeder));

        assert_eq!(game.state(), LifecycleState::Init);
        assert_eq!(game.level(), 2);
        assert_eq!(game.initial_cells(Owner::SideA).len(), 4);
        assert_eq!(game.initial_cells(Owner::SideB).len(), 4);
        assert!(game.board().contains(13, 5));
        assert_eq!(game.history_len(), 1);
    }

    #[test]
    fn test_new_level_requires_side_a_win() {
        let mut game = game();
        game.seed(&[(3, 4)], &BLOCK);
        game.run(10);
        let mut seeder = PatternSeeder::new([(1, 1)]);

        assert!(!game.new_level(&mut seeder));
        assert_eq!(game.level(), 1);
        assert_eq!(game.state(), LifecycleState::SideBWon);
    }

    #[test]
    fn test_run_respects_cap() {
        let mut game = game();
        // Blinkers repeat every two generations
        game.seed(&[(1, 3), (2, 3), (3, 3)], &[(3, 3), (4, 3), (5, 3)]);

        assert_eq!(game.run(1), LifecycleState::InProgress);
        assert_eq!(game.generation(), 1);
        assert!(!game.is_over());
    }
}
