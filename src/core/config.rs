//! Engine configuration.
//!
//! All values are fixed when a game starts. Use the builder methods on top
//! of [`EngineConfig::default`] and call [`EngineConfig::validate`] (done
//! automatically by the engine constructor).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Smallest supported board edge; a run needs three cells.
pub const MIN_FIELD_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_FIELD_SIZE: usize = 255;

/// Fewer than three types makes cascades near-endless.
pub const MIN_TILE_TYPES: u8 = 3;

/// Upper bound on distinct tile types.
pub const MAX_TILE_TYPES: u8 = 32;

/// Board engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board edge length; the board is `field_size × field_size`.
    pub field_size: usize,

    /// Move budget granted by `start()`.
    pub initial_moves: u32,

    /// Number of distinct tile types, drawn uniformly from `1..=tile_types`.
    pub tile_types: u8,

    /// Seed for the engine RNG.
    /// Same seed produces identical games.
    pub seed: u64,

    /// Stay in `Resolving` after each operation until the host calls
    /// `finish_presentation()`. Lets an animator block input while it plays
    /// back the emitted events.
    pub hold_for_presentation: bool,

    /// Consecutive reshuffles that may still leave a dead board before the
    /// board is refilled from scratch.
    pub regenerate_after: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_size: 15,
            initial_moves: 30,
            tile_types: 5,
            seed: 42,
            hold_for_presentation: false,
            regenerate_after: 32,
        }
    }
}

impl EngineConfig {
    /// Set the board edge length.
    #[must_use]
    pub fn with_field_size(mut self, field_size: usize) -> Self {
        self.field_size = field_size;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.initial_moves = moves;
        self
    }

    /// Set the number of tile types.
    #[must_use]
    pub fn with_tile_types(mut self, tile_types: u8) -> Self {
        self.tile_types = tile_types;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Hold `Resolving` until the presentation layer reports completion.
    #[must_use]
    pub fn holding_for_presentation(mut self) -> Self {
        self.hold_for_presentation = true;
        self
    }

    /// Set the reshuffle failure threshold (clamped to at least 1).
    #[must_use]
    pub fn with_regenerate_after(mut self, attempts: u32) -> Self {
        self.regenerate_after = attempts.max(1);
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.field_size * self.field_size
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_size) {
            return Err(EngineError::FieldSizeOutOfRange(self.field_size));
        }
        if !(MIN_TILE_TYPES..=MAX_TILE_TYPES).contains(&self.tile_types) {
            return Err(EngineError::TileTypesOutOfRange(self.tile_types));
        }
        if self.initial_moves == 0 {
            return Err(EngineError::NoMoveBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.field_size, 15);
        assert_eq!(config.initial_moves, 30);
        assert_eq!(config.tile_types, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_field() {
        let config = EngineConfig::default().with_field_size(2);
        assert_eq!(config.validate(), Err(EngineError::FieldSizeOutOfRange(2)));
    }

    #[test]
    fn test_validate_rejects_tile_types() {
        let config = EngineConfig::default().with_tile_types(2);
        assert_eq!(config.validate(), Err(EngineError::TileTypesOutOfRange(2)));

        let config = EngineConfig::default().with_tile_types(33);
        assert_eq!(config.validate(), Err(EngineError::TileTypesOutOfRange(33)));
    }

    #[test]
    fn test_validate_rejects_zero_moves() {
        let config = EngineConfig::default().with_moves(0);
        assert_eq!(config.validate(), Err(EngineError::NoMoveBudget));
    }

    #[test]
    fn test_regenerate_after_clamped() {
        let config = EngineConfig::default().with_regenerate_after(0);
        assert_eq!(config.regenerate_after, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"field_size": 8, "seed": 7}"#).unwrap();
        assert_eq!(config.field_size, 8);
        assert_eq!(config.seed, 7);
        assert_eq!(config.initial_moves, 30);
        assert_eq!(config.cell_count(), 64);
    }
}
