//! Board engine: lifecycle, swap handling, and the resolve cascade.
//!
//! - [`BoardEngine`]: owns the grid and drives every operation
//! - [`BoardEvent`]: per-step record of what changed, for renderers
//! - [`SwapResult`], [`SelectOutcome`]: host-facing results
//! - [`BoardSnapshot`]: read-only view of the board

pub mod board;
pub mod events;
pub mod result;
pub mod snapshot;
pub mod state;

pub use board::BoardEngine;
pub use events::{BoardEvent, CascadeStep, GravityReport, SpawnedTile, TileMove};
pub use result::{Resolution, SelectOutcome, SwapResult};
pub use snapshot::{BoardSnapshot, CellSnapshot};
pub use state::{EngineState, MoveRecord, Session};
