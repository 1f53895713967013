//! Board coordinates.
//!
//! Positions are zero-based `{column, row}` pairs. Row 0 is the top of the
//! board, so gravity pulls tiles toward larger row indices.
//!
//! ```
//! use match3_engine::core::Position;
//!
//! let a = Position::new(2, 3);
//! assert!(a.is_adjacent(Position::new(2, 4)));
//! assert!(!a.is_adjacent(Position::new(3, 4)));
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column index (x).
    pub column: usize,
    /// Row index (y), 0 at the top.
    pub row: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Rebuild a position from a column-major flat index.
    #[must_use]
    pub const fn from_index(index: usize, field_size: usize) -> Self {
        Self {
            column: index / field_size,
            row: index % field_size,
        }
    }

    /// Column-major flat index (`column * field_size + row`).
    #[must_use]
    pub const fn index(self, field_size: usize) -> usize {
        self.column * field_size + self.row
    }

    /// Check whether this position lies on a board of the given size.
    #[must_use]
    pub const fn in_bounds(self, field_size: usize) -> bool {
        self.column < field_size && self.row < field_size
    }

    /// Manhattan distance between two positions.
    const fn distance(self, other: Position) -> usize {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// True when the positions share an edge (4-adjacency).
    #[must_use]
    pub const fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
