//! Deadlock recovery by permuting every tile on the board.

use crate::core::{Grid, Position, Tile, TileSource};
use crate::engine::events::TileMove;

/// Uniformly permute the tiles of `grid` in place.
///
/// Tiles are drawn one at a time from the remaining pool at a random index
/// and laid back down in column-major order. Returns the motion of every
/// tile that ended up on a different cell.
pub fn shuffle_grid(grid: &mut Grid, source: &mut impl TileSource) -> Vec<TileMove> {
    let size = grid.size();
    let mut pool: Vec<(usize, Tile)> = grid.tiles().iter().copied().enumerate().collect();

    let mut placed = Vec::with_capacity(pool.len());
    let mut moves = Vec::new();

    while !pool.is_empty() {
        let (from, tile) = pool.remove(source.pick_index(pool.len()));
        let to = placed.len();
        if from != to {
            moves.push(TileMove {
                id: tile.id,
                kind: tile.kind,
                from: Position::from_index(from, size),
                to: Position::from_index(to, size),
            });
        }
        placed.push(tile);
    }

    *grid = Grid::from_tiles(size, placed);
    moves
}
