//! Tiles: the playable units occupying grid cells.
//!
//! Tiles are plain value records. Identity is transient: a tile that is
//! matched and replaced is a brand new tile with a fresh [`TileId`], never
//! the old one with a mutated type. Presentation layers use the id to track
//! a tile across moves within one update batch.

use serde::{Deserialize, Serialize};

/// Tile category, `1..=tile_types`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileType(pub u8);

impl TileType {
    /// Create a new tile type.
    #[must_use]
    pub const fn new(kind: u8) -> Self {
        Self(kind)
    }

    /// Get the raw type value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single tile instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// A tile occupying one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Instance identity, unique within a session.
    pub id: TileId,
    /// Gameplay category.
    pub kind: TileType,
    /// Set once the tile is matched, cleared by replacing the tile.
    pub removed: bool,
}

impl Tile {
    /// Create a fresh, non-removed tile.
    #[must_use]
    pub const fn new(id: TileId, kind: TileType) -> Self {
        Self {
            id,
            kind,
            removed: false,
        }
    }
}

/// Allocates monotonically increasing tile ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TileIdAllocator {
    next: u32,
}

impl TileIdAllocator {
    /// Create an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id.
    pub fn allocate(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_not_removed() {
        let tile = Tile::new(TileId(3), TileType::new(2));
        assert!(!tile.removed);
        assert_eq!(tile.kind.raw(), 2);
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut ids = TileIdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        assert!(a < b);
        assert_eq!(ids.allocated(), 2);
    }
}
