//! Core board types: positions, tiles, grid, RNG, configuration.
//!
//! This module holds the pure data model. Nothing here knows about
//! matching, scoring, or the engine state machine.

pub mod position;
pub mod tile;
pub mod rng;
pub mod config;
pub mod grid;

pub use position::Position;
pub use tile::{Tile, TileId, TileIdAllocator, TileType};
pub use rng::{GameRng, TileSource};
pub use config::{EngineConfig, MAX_FIELD_SIZE, MAX_TILE_TYPES, MIN_FIELD_SIZE, MIN_TILE_TYPES};
pub use grid::Grid;
