//! Events emitted for the presentation layer.
//!
//! The engine never waits on wall-clock time. Every operation mutates the
//! board synchronously and appends a batch of [`BoardEvent`]s describing
//! what happened, in order, with enough per-tile motion data for an
//! external animator to play it back.

use serde::{Deserialize, Serialize};

use super::snapshot::CellSnapshot;
use crate::core::{Position, TileId, TileType};
use crate::matching::MatchSet;

/// A surviving tile that changed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    /// Tile identity.
    pub id: TileId,
    /// Tile type (unchanged by the move).
    pub kind: TileType,
    /// Cell before the transition.
    pub from: Position,
    /// Cell after the transition.
    pub to: Position,
}

/// A freshly generated tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    /// New tile identity.
    pub id: TileId,
    /// Type drawn for the tile.
    pub kind: TileType,
    /// Cell the tile ends up in.
    pub position: Position,
    /// Row the tile appears to fall from. Negative rows sit above the board.
    pub spawn_row: isize,
}

/// Board changes produced by one gravity pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityReport {
    /// Distinct cleared cells, column-major order.
    pub removed: Vec<Position>,
    /// Surviving tiles that fell, with old and new cells.
    pub moved: Vec<TileMove>,
    /// Replacement tiles filling the vacated top rows.
    pub spawned: Vec<SpawnedTile>,
}

/// One pass of the resolve cascade: match, score, clear, refill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStep {
    /// Pass number within the current cascade, starting at 0.
    pub pass: usize,
    /// Runs matched on this pass.
    pub runs: MatchSet,
    /// Points awarded for `runs`.
    pub score_delta: u64,
    /// Clearing and refill details.
    pub gravity: GravityReport,
}

/// A notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The board was filled with a fresh set of tiles, listed column-major.
    Filled { cells: Vec<CellSnapshot> },
    /// Two tiles were exchanged and the swap was kept.
    Swapped { a: Position, b: Position },
    /// Two tiles were exchanged and immediately exchanged back (no match).
    SwapReverted { a: Position, b: Position },
    /// One cascade pass resolved.
    Cascade(CascadeStep),
    /// No move was possible; tiles were permuted.
    Reshuffled { moves: Vec<TileMove> },
    /// Reshuffling kept failing; the board was refilled from scratch.
    Regenerated { cells: Vec<CellSnapshot> },
    /// The game stopped and the board was cleared.
    Cleared,
}

impl BoardEvent {
    /// True for the events that signal deadlock recovery.
    #[must_use]
    pub fn is_reshuffle(&self) -> bool {
        matches!(self, BoardEvent::Reshuffled { .. } | BoardEvent::Regenerated { .. })
    }
}
