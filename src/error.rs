//! Engine error taxonomy.
//!
//! Nothing here is fatal. Configuration errors are returned from
//! constructors; swap usage errors are reported inside
//! [`SwapResult::Rejected`](crate::engine::SwapResult::Rejected).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Position;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    #[error("Field size {0} is outside the supported range 3..=255")]
    FieldSizeOutOfRange(usize),
    #[error("Tile type count {0} is outside the supported range 3..=32")]
    TileTypesOutOfRange(u8),
    #[error("Initial move budget must be at least 1")]
    NoMoveBudget,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Tile type {0} is outside the configured range")]
    TileTypeOutOfRange(u8),
    #[error("Position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("Positions {0} and {1} are not adjacent")]
    InvalidAdjacency(Position, Position),
    #[error("Engine is busy resolving the board")]
    EngineBusy,
    #[error("No moves remaining")]
    GameOver,
    #[error("Game has not been started")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, EngineError>;
