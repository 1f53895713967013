//! Read-only board view for renderers.

use serde::{Deserialize, Serialize};

use super::state::EngineState;
use crate::core::{Grid, Position, TileId, TileType};

/// One occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub position: Position,
    pub id: TileId,
    pub kind: TileType,
}

/// Everything a renderer needs to draw the current board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board edge length; 0 while idle.
    pub field_size: usize,
    pub state: EngineState,
    pub score: u64,
    pub moves_remaining: u32,
    pub selection: Option<Position>,
    /// Cells in column-major order.
    pub cells: Vec<CellSnapshot>,
}

impl BoardSnapshot {
    pub(crate) fn cells_of(grid: &Grid) -> Vec<CellSnapshot> {
        grid.iter()
            .map(|(position, tile)| CellSnapshot {
                position,
                id: tile.id,
                kind: tile.kind,
            })
            .collect()
    }

    /// Cell at a position, if the board is populated.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&CellSnapshot> {
        position
            .in_bounds(self.field_size)
            .then(|| &self.cells[position.index(self.field_size)])
    }
}
