//! The board engine: owns the grid and session, runs the cascade loop.
//!
//! ## Resolve cascade
//!
//! 1. Find runs. None left ⇒ the board has settled.
//! 2. Score them, clear them, let gravity refill the columns.
//! 3. Repeat on the new board.
//!
//! Once a root cascade settles and no swap can create a match, the tiles are
//! reshuffled and one more cascade runs to clear anything the shuffle lined
//! up. This repeats until the board is playable, so the caller never sees a
//! dead board. After `regenerate_after` failed reshuffles in a row the board
//! is refilled from scratch instead.
//!
//! The cascade is an explicit loop; only the root call checks for deadlock.
//!
//! ## Example
//!
//! ```
//! use match3_engine::{BoardEngine, EngineConfig, EngineState};
//!
//! let mut engine = BoardEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! engine.start();
//!
//! assert_eq!(engine.state(), EngineState::AwaitingSelection);
//! assert!(engine.has_possible_moves());
//!
//! let (a, b) = engine.hint().unwrap();
//! assert!(engine.request_swap(a, b).is_resolved());
//! assert_eq!(engine.moves_remaining(), 29);
//! ```

use log::{debug, info, trace, warn};

use super::events::{BoardEvent, CascadeStep};
use super::result::{Resolution, SelectOutcome, SwapResult};
use super::snapshot::BoardSnapshot;
use super::state::{EngineState, MoveRecord, Session};
use crate::core::{EngineConfig, GameRng, Grid, Position, TileIdAllocator, TileSource};
use crate::error::{EngineError, Result};
use crate::matching::{find_matches, has_matches, score_runs};
use crate::resolve::{apply_gravity, find_possible_move, has_possible_moves, shuffle_grid};

/// Match-3 board engine.
///
/// All randomness goes through the single `TileSource` `S`, so a seeded
/// source makes every game reproducible.
#[derive(Clone, Debug)]
pub struct BoardEngine<S = GameRng> {
    config: EngineConfig,
    source: S,
    ids: TileIdAllocator,
    grid: Option<Grid>,
    session: Session,
    state: EngineState,
    /// State to enter once the host finishes presenting the last operation.
    settled_state: EngineState,
    events: Vec<BoardEvent>,
}

impl BoardEngine<GameRng> {
    /// Create an idle engine seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }
}

impl<S: TileSource> BoardEngine<S> {
    /// Create an idle engine drawing randomness from `source`.
    pub fn with_source(config: EngineConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            ids: TileIdAllocator::new(),
            grid: None,
            session: Session::default(),
            state: EngineState::Idle,
            settled_state: EngineState::Idle,
            events: Vec::new(),
        })
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// True while swaps are blocked by an unfinished presentation.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state == EngineState::Resolving
    }

    /// The board, or `None` while idle.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Session data (score, moves, selection, history).
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.session.score
    }

    /// Swaps left.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.session.moves_remaining
    }

    /// Cell picked by the first click, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Position> {
        self.session.selection
    }

    /// Read-only view of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            field_size: self.grid.as_ref().map_or(0, Grid::size),
            state: self.state,
            score: self.session.score,
            moves_remaining: self.session.moves_remaining,
            selection: self.session.selection,
            cells: self.grid.as_ref().map(BoardSnapshot::cells_of).unwrap_or_default(),
        }
    }

    /// True when some adjacent swap would create a match.
    #[must_use]
    pub fn has_possible_moves(&self) -> bool {
        self.grid.as_ref().is_some_and(has_possible_moves)
    }

    /// One swap that would create a match.
    #[must_use]
    pub fn hint(&self) -> Option<(Position, Position)> {
        self.grid.as_ref().and_then(find_possible_move)
    }

    // === Events ===

    /// Events emitted since the last drain, oldest first.
    #[must_use]
    pub fn pending_events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    // === Lifecycle ===

    /// Start a new game on a randomly filled board.
    ///
    /// A running game is stopped first. The initial cascade clears any runs
    /// the fill produced; their points count toward the new score.
    pub fn start(&mut self) -> Resolution {
        self.reset();
        let grid = Grid::fill(
            self.config.field_size,
            self.config.tile_types,
            &mut self.source,
            &mut self.ids,
        );
        self.begin(grid)
    }

    /// Start a new game on an explicit board, `columns[c][r]`.
    pub fn start_with_grid<C: AsRef<[u8]>>(&mut self, columns: &[C]) -> Result<Resolution> {
        if columns.len() != self.config.field_size {
            return Err(EngineError::InvalidBoardShape);
        }
        let max = self.config.tile_types;
        if let Some(&bad) = columns
            .iter()
            .flat_map(|c| c.as_ref())
            .find(|&&kind| kind == 0 || kind > max)
        {
            return Err(EngineError::TileTypeOutOfRange(bad));
        }

        self.reset();
        let grid = Grid::from_columns(columns, &mut self.ids)?;
        Ok(self.begin(grid))
    }

    /// Stop the game and clear the board.
    pub fn stop(&mut self) {
        self.reset();
        self.state = EngineState::Idle;
        self.settled_state = EngineState::Idle;
        debug!("engine stopped");
    }

    /// Release the hold after the host has finished presenting the last
    /// operation. No-op unless the engine is holding in `Resolving`.
    pub fn finish_presentation(&mut self) -> EngineState {
        if self.state == EngineState::Resolving {
            self.state = self.settled_state;
            trace!("presentation finished, now {}", self.state);
        }
        self.state
    }

    // === Moves ===

    /// Swap two adjacent cells.
    ///
    /// If the swap creates no match it is reverted and no move is spent.
    /// Otherwise one move is spent and the board resolves.
    pub fn request_swap(&mut self, a: Position, b: Position) -> SwapResult {
        if let Err(err) = self.check_swap(a, b) {
            debug!("swap {} <-> {} rejected: {}", a, b, err);
            return SwapResult::Rejected(err);
        }
        let Some(grid) = self.grid.as_mut() else {
            return SwapResult::Rejected(EngineError::NotStarted);
        };

        grid.swap(a, b);
        if !has_matches(grid) {
            grid.swap(a, b);
            self.events.push(BoardEvent::SwapReverted { a, b });
            self.finish(EngineState::AwaitingSelection);
            trace!("swap {} <-> {} reverted", a, b);
            return SwapResult::NoEffect;
        }

        self.state = EngineState::Resolving;
        self.session.consume_move();
        self.events.push(BoardEvent::Swapped { a, b });

        let resolution = self.resolve();
        self.session.record(MoveRecord {
            a,
            b,
            score_delta: resolution.score_delta,
            cascade_steps: resolution.cascade_steps,
            reshuffled: resolution.reshuffled,
        });

        let next = if self.session.moves_remaining == 0 {
            debug!("move budget spent, final score {}", self.session.score);
            EngineState::GameOver
        } else {
            EngineState::AwaitingSelection
        };
        self.finish(next);

        SwapResult::Resolved {
            score_delta: resolution.score_delta,
            moves_remaining: self.session.moves_remaining,
            cascade_steps: resolution.cascade_steps,
            reshuffled: resolution.reshuffled,
        }
    }

    /// Two-click selection flow.
    ///
    /// The first click selects a cell. A second click on a neighbour swaps
    /// the two; a second click anywhere else drops the selection.
    pub fn select(&mut self, pos: Position) -> SelectOutcome {
        let on_board = self.grid.as_ref().is_some_and(|g| g.contains(pos));
        if !self.state.accepts_swaps() || self.session.moves_remaining == 0 || !on_board {
            return SelectOutcome::Ignored;
        }

        match self.session.selection.take() {
            None => {
                self.session.selection = Some(pos);
                SelectOutcome::Selected(pos)
            }
            Some(prev) if prev.is_adjacent(pos) => {
                SelectOutcome::Swapped(self.request_swap(prev, pos))
            }
            Some(prev) => SelectOutcome::Deselected(prev),
        }
    }

    // === Internals ===

    fn check_swap(&self, a: Position, b: Position) -> Result<()> {
        match self.state {
            EngineState::Idle => return Err(EngineError::NotStarted),
            EngineState::Resolving => return Err(EngineError::EngineBusy),
            EngineState::GameOver => return Err(EngineError::GameOver),
            EngineState::AwaitingSelection => {}
        }
        if self.session.moves_remaining == 0 {
            return Err(EngineError::GameOver);
        }

        let size = self.config.field_size;
        for pos in [a, b] {
            if !pos.in_bounds(size) {
                return Err(EngineError::OutOfBounds(pos));
            }
        }
        if !a.is_adjacent(b) {
            return Err(EngineError::InvalidAdjacency(a, b));
        }
        Ok(())
    }

    /// Drop the board and session without changing the lifecycle state.
    fn reset(&mut self) {
        if self.grid.take().is_some() {
            self.events.push(BoardEvent::Cleared);
        }
        self.session = Session::default();
    }

    fn begin(&mut self, grid: Grid) -> Resolution {
        debug!(
            "starting game: {}x{} board, {} tile types, {} moves",
            grid.size(),
            grid.size(),
            self.config.tile_types,
            self.config.initial_moves
        );
        let cells = BoardSnapshot::cells_of(&grid);
        self.grid = Some(grid);
        self.session = Session::new(self.config.initial_moves);
        self.state = EngineState::Resolving;
        self.events.push(BoardEvent::Filled { cells });

        let resolution = self.resolve();
        self.finish(EngineState::AwaitingSelection);
        resolution
    }

    /// Enter `next`, or hold in `Resolving` until the host catches up.
    fn finish(&mut self, next: EngineState) {
        if self.config.hold_for_presentation {
            self.state = EngineState::Resolving;
            self.settled_state = next;
        } else {
            self.state = next;
        }
    }

    /// Root resolve cascade: settle, then recover from deadlock.
    fn resolve(&mut self) -> Resolution {
        let mut resolution = Resolution::default();
        self.settle(&mut resolution);

        let mut failures = 0;
        loop {
            let Some(grid) = self.grid.as_mut() else {
                break;
            };
            if has_possible_moves(grid) {
                break;
            }

            resolution.reshuffled = true;
            if failures >= self.config.regenerate_after {
                warn!("{} reshuffles left the board dead, regenerating", failures);
                *grid = Grid::fill(
                    self.config.field_size,
                    self.config.tile_types,
                    &mut self.source,
                    &mut self.ids,
                );
                let cells = BoardSnapshot::cells_of(grid);
                self.events.push(BoardEvent::Regenerated { cells });
                failures = 0;
            } else {
                info!("no moves left, reshuffling");
                let moves = shuffle_grid(grid, &mut self.source);
                self.events.push(BoardEvent::Reshuffled { moves });
                failures += 1;
            }

            self.settle(&mut resolution);
        }

        resolution
    }

    /// Match, score, and refill until no runs remain.
    fn settle(&mut self, resolution: &mut Resolution) {
        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        let mut pass = 0;
        loop {
            let runs = find_matches(grid);
            if runs.is_empty() {
                break;
            }

            let score_delta = score_runs(runs.iter());
            self.session.add_score(score_delta);
            let gravity = apply_gravity(
                grid,
                &runs,
                self.config.tile_types,
                &mut self.source,
                &mut self.ids,
            );
            trace!(
                "cascade pass {}: {} runs, {} cells cleared, +{} points",
                pass,
                runs.len(),
                gravity.removed.len(),
                score_delta
            );

            self.events.push(BoardEvent::Cascade(CascadeStep {
                pass,
                runs,
                score_delta,
                gravity,
            }));
            resolution.score_delta += score_delta;
            resolution.cascade_steps += 1;
            pass += 1;
        }

        debug_assert!(grid.is_settled_full());
    }
}
