//! Engine lifecycle state and per-game session data.
//!
//! ## EngineState
//!
//! ```text
//!            start()                      swap with matches
//!   Idle ───────────► AwaitingSelection ─────────────────► Resolving
//!    ▲                  ▲     │                                │
//!    │ stop()           │     └─ last move spent ─► GameOver   │
//!    │                  └──────────── settled ◄────────────────┘
//! ```
//!
//! `Resolving` is only observable from outside when the engine is
//! configured to hold for presentation.
//!
//! ## Session
//!
//! Score, remaining moves, current selection, and the move history. Uses
//! `im` persistent vectors so a session snapshot clones in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Lifecycle state of the board engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// No game running; the board is empty.
    #[default]
    Idle,
    /// A cascade or its presentation is in progress; swaps are ignored.
    Resolving,
    /// Waiting for the player to pick a swap.
    AwaitingSelection,
    /// The move budget is spent.
    GameOver,
}

impl EngineState {
    /// True when a swap request would be considered.
    #[must_use]
    pub const fn accepts_swaps(self) -> bool {
        matches!(self, EngineState::AwaitingSelection)
    }
}

impl std::fmt::Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EngineState::Idle => "idle",
            EngineState::Resolving => "resolving",
            EngineState::AwaitingSelection => "awaiting selection",
            EngineState::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// A consumed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// First swapped cell.
    pub a: Position,
    /// Second swapped cell.
    pub b: Position,
    /// Points earned by the whole cascade.
    pub score_delta: u64,
    /// Cascade passes that matched something.
    pub cascade_steps: usize,
    /// Whether the board had to be reshuffled afterwards.
    pub reshuffled: bool,
}

/// Per-game mutable data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    /// Points so far. Never decreases within a session.
    pub score: u64,

    /// Swaps left. Only decremented by a swap that produced a match.
    pub moves_remaining: u32,

    /// Cell picked by the first click of a two-click swap.
    pub selection: Option<Position>,

    /// Consumed moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl Session {
    /// Fresh session with the given move budget.
    #[must_use]
    pub fn new(moves: u32) -> Self {
        Self {
            moves_remaining: moves,
            ..Self::default()
        }
    }

    /// Add points.
    pub fn add_score(&mut self, delta: u64) {
        self.score = self.score.saturating_add(delta);
    }

    /// Spend one move.
    pub fn consume_move(&mut self) {
        debug_assert!(self.moves_remaining > 0);
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
    }

    /// Append a consumed move to the history.
    pub fn record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    /// Number of consumed moves.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }
}
