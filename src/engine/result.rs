//! Results returned to the host from engine operations.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::error::EngineError;

/// Summary of one root resolve cascade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Points earned across every pass.
    pub score_delta: u64,
    /// Passes that matched at least one run.
    pub cascade_steps: usize,
    /// Whether a dead board had to be reshuffled.
    pub reshuffled: bool,
}

/// Outcome of a swap request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapResult {
    /// The request was not acted on; the board is unchanged.
    Rejected(EngineError),
    /// The swap created no match and was reverted. No move was spent.
    NoEffect,
    /// The swap created a match and the board resolved.
    Resolved {
        score_delta: u64,
        moves_remaining: u32,
        cascade_steps: usize,
        reshuffled: bool,
    },
}

impl SwapResult {
    /// True when a move was consumed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, SwapResult::Resolved { .. })
    }
}

/// Outcome of a click in the two-click selection flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// Input is not accepted right now (busy, idle, or out of moves).
    Ignored,
    /// The cell became the current selection.
    Selected(Position),
    /// The previous selection was dropped without swapping.
    Deselected(Position),
    /// The click completed a swap with the previous selection.
    Swapped(SwapResult),
}
