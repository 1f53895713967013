//! # match3-engine
//!
//! Board resolution engine for match-3 puzzle games.
//!
//! A square grid of colored tiles. Swapping two neighbours that lines up
//! three or more of a kind clears the run, scores it, drops the survivors,
//! and refills from the top until the board settles. A settled board that
//! offers no scoring swap is reshuffled before the player sees it.
//!
//! ## Design Principles
//!
//! 1. **Synchronous Core**: Every operation finishes before it returns. The
//!    engine never sleeps or waits on a timer; it emits [`BoardEvent`]s that
//!    a renderer can animate at its own pace.
//!
//! 2. **Deterministic**: All randomness flows through one [`TileSource`].
//!    The same seed and the same swaps reproduce the same game.
//!
//! 3. **Values, Not Objects**: Tiles are plain values in a flat
//!    column-major arena; identity is a transient [`TileId`].
//!
//! ## Modules
//!
//! - `core`: Positions, tiles, grid, RNG, configuration
//! - `matching`: Run detection and scoring
//! - `resolve`: Gravity, deadlock detection, reshuffle
//! - `engine`: Lifecycle state machine and resolve cascade
//! - `error`: Error taxonomy

pub mod core;
pub mod error;
pub mod matching;
pub mod resolve;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Position, Tile, TileId, TileIdAllocator, TileType,
    GameRng, TileSource,
    EngineConfig, Grid,
};

pub use crate::error::{EngineError, Result};

pub use crate::matching::{
    find_matches, has_matches, run_score, score_runs,
    Axis, MatchSet, Run, MIN_RUN,
};

pub use crate::resolve::{apply_gravity, find_possible_move, has_possible_moves, shuffle_grid};

pub use crate::engine::{
    BoardEngine, EngineState, Session, MoveRecord,
    BoardEvent, CascadeStep, GravityReport, SpawnedTile, TileMove,
    Resolution, SwapResult, SelectOutcome,
    BoardSnapshot, CellSnapshot,
};
