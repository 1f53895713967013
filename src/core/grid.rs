//! The board: a square arena of tiles.
//!
//! Tiles live in one flat `Vec` in column-major order, so cell
//! `(column, row)` sits at `column * size + row` and each column is a
//! contiguous slice. Coordinates are canonical: swapping two cells
//! exchanges their tiles, the positions stay put.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::rng::TileSource;
use super::tile::{Tile, TileIdAllocator, TileType};
use crate::error::{EngineError, Result};

/// Square grid of tiles indexed `[column][row]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Fill a new grid with uniformly random tile types.
    pub fn fill(
        size: usize,
        tile_types: u8,
        source: &mut impl TileSource,
        ids: &mut TileIdAllocator,
    ) -> Self {
        let tiles = (0..size * size)
            .map(|_| Tile::new(ids.allocate(), source.next_tile_type(tile_types)))
            .collect();
        Self { size, tiles }
    }

    /// Build a grid from explicit column-major tile types.
    ///
    /// `columns[c][r]` is the type at column `c`, row `r`. Every column must
    /// have as many rows as there are columns.
    pub fn from_columns<C: AsRef<[u8]>>(columns: &[C], ids: &mut TileIdAllocator) -> Result<Self> {
        let size = columns.len();
        if columns.iter().any(|c| c.as_ref().len() != size) {
            return Err(EngineError::InvalidBoardShape);
        }

        let tiles = columns
            .iter()
            .flat_map(|c| c.as_ref().iter().copied())
            .map(|kind| Tile::new(ids.allocate(), TileType::new(kind)))
            .collect();

        Ok(Self { size, tiles })
    }

    /// Reassemble a grid from a column-major tile sequence.
    pub(crate) fn from_tiles(size: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True only for a zero-sized grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check whether a position lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    /// Get the tile at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.contains(pos).then(|| &self.tiles[pos.index(self.size)])
    }

    /// Replace the tile at a position.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        self[pos] = tile;
    }

    /// Tile type at a position.
    #[must_use]
    pub fn tile_type(&self, pos: Position) -> TileType {
        self[pos].kind
    }

    /// All tiles in column-major order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over every cell with its position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (Position::from_index(i, self.size), tile))
    }

    /// Tiles of one column, top to bottom.
    #[must_use]
    pub fn column(&self, column: usize) -> &[Tile] {
        let start = column * self.size;
        &self.tiles[start..start + self.size]
    }

    /// Mutable tiles of one column, top to bottom.
    pub fn column_mut(&mut self, column: usize) -> &mut [Tile] {
        let start = column * self.size;
        &mut self.tiles[start..start + self.size]
    }

    /// Tiles of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Tile> + '_ {
        (0..self.size).map(move |column| &self[Position::new(column, row)])
    }

    /// Column types, top to bottom.
    #[must_use]
    pub fn column_types(&self, column: usize) -> Vec<TileType> {
        self.column(column).iter().map(|t| t.kind).collect()
    }

    /// Row types, left to right.
    #[must_use]
    pub fn row_types(&self, row: usize) -> Vec<TileType> {
        self.row(row).map(|t| t.kind).collect()
    }

    /// Exchange the tiles occupying two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        let (ia, ib) = (a.index(self.size), b.index(self.size));
        self.tiles.swap(ia, ib);
    }

    /// True when every cell holds a live (non-removed) tile.
    #[must_use]
    pub fn is_settled_full(&self) -> bool {
        self.tiles.len() == self.size * self.size && self.tiles.iter().all(|t| !t.removed)
    }

    /// Raw column-major types, `columns[c][r]`.
    #[must_use]
    pub fn to_columns(&self) -> Vec<Vec<u8>> {
        self.tiles
            .chunks(self.size.max(1))
            .map(|column| column.iter().map(|t| t.kind.raw()).collect())
            .collect()
    }

    /// Compare two grids by tile type only, ignoring tile identity.
    #[must_use]
    pub fn same_types(&self, other: &Grid) -> bool {
        self.size == other.size
            && self
                .tiles
                .iter()
                .zip(&other.tiles)
                .all(|(a, b)| a.kind == b.kind)
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.index(self.size)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.tiles[pos.index(self.size)]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = self.row(row).map(|t| t.kind.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
