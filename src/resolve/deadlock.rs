//! Deadlock detection: does any single adjacent swap create a match?
//!
//! ## Template detector
//!
//! The production path scans for four near-match shapes. Each marks the
//! cells of a 2×3 or 1×4 footprint that must share one type for a single
//! swap to complete a run of three:
//!
//! ```text
//! P1: 0 1 0    P2: 0 1 1    P3: 1 1 0    P4: 1 1 0 1
//!     1 0 1        1 0 0        0 0 1
//! ```
//!
//! Every template is tried in all four rotations at every offset where it
//! fits. The first hit short-circuits.
//!
//! ## Brute-force detector
//!
//! [`find_possible_move`] simulates every adjacent swap and checks for a run
//! through either swapped cell. It is slower but obviously correct, and is
//! used for hints and to cross-check the templates.

use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::core::{Grid, Position};

/// Template rows as written above, `1` = cell must hold the shared type.
const PATTERNS: [&[&[u8]]; 4] = [
    &[&[0, 1, 0], &[1, 0, 1]],
    &[&[0, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 0, 1]],
    &[&[1, 1, 0, 1]],
];

/// One rotation of a template, reduced to its flagged cells.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Template {
    /// Footprint extent along columns.
    columns: usize,
    /// Footprint extent along rows.
    rows: usize,
    /// Flagged `(column, row)` offsets inside the footprint.
    cells: SmallVec<[(usize, usize); 4]>,
}

impl Template {
    fn from_mask(mask: &[Vec<u8>]) -> Self {
        let columns = mask.len();
        let rows = mask.first().map_or(0, Vec::len);
        let cells = mask
            .iter()
            .enumerate()
            .flat_map(|(c, line)| {
                line.iter()
                    .enumerate()
                    .filter(|&(_, &flag)| flag == 1)
                    .map(move |(r, _)| (c, r))
            })
            .collect();
        Self {
            columns,
            rows,
            cells,
        }
    }

    fn fits_at(&self, grid: &Grid, origin: Position) -> bool {
        let at = |(dc, dr): (usize, usize)| {
            grid.tile_type(Position::new(origin.column + dc, origin.row + dr))
        };
        let first = at(self.cells[0]);
        self.cells[1..].iter().all(|&cell| at(cell) == first)
    }
}

/// Rotate a mask a quarter turn.
fn rotate(mask: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let rows = mask.len();
    let columns = mask[0].len();
    (0..columns)
        .map(|x| (0..rows).map(|y| mask[y][columns - 1 - x]).collect())
        .collect()
}

/// All four rotations of every pattern, built on first use.
fn templates() -> &'static [Template] {
    static TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();
    TEMPLATES.get_or_init(build_templates)
}

fn build_templates() -> Vec<Template> {
    let mut out = Vec::with_capacity(PATTERNS.len() * 4);
    for pattern in PATTERNS {
        let mut mask: Vec<Vec<u8>> = pattern.iter().map(|row| row.to_vec()).collect();
        for _ in 0..4 {
            mask = rotate(&mask);
            out.push(Template::from_mask(&mask));
        }
    }
    out
}

/// True when at least one adjacent swap would create a match.
///
/// Uses the template scan. Agrees with [`has_possible_moves_brute_force`] on
/// every board that holds no existing run.
#[must_use]
pub fn has_possible_moves(grid: &Grid) -> bool {
    let size = grid.size();
    templates().iter().any(|template| {
        if template.columns > size || template.rows > size {
            return false;
        }
        (0..=size - template.columns).any(|column| {
            (0..=size - template.rows).any(|row| template.fits_at(grid, Position::new(column, row)))
        })
    })
}

/// Brute-force counterpart of [`has_possible_moves`].
#[must_use]
pub fn has_possible_moves_brute_force(grid: &Grid) -> bool {
    find_possible_move(grid).is_some()
}

/// Find one adjacent swap that creates a run, scanning column-major and
/// trying the lower neighbour before the right neighbour.
#[must_use]
pub fn find_possible_move(grid: &Grid) -> Option<(Position, Position)> {
    let size = grid.size();
    let mut scratch = grid.clone();

    for column in 0..size {
        for row in 0..size {
            let a = Position::new(column, row);
            let candidates = [Position::new(column, row + 1), Position::new(column + 1, row)];
            for b in candidates.into_iter().filter(|b| b.in_bounds(size)) {
                if scratch.tile_type(a) == scratch.tile_type(b) {
                    continue;
                }
                scratch.swap(a, b);
                let hit = run_through(&scratch, a) || run_through(&scratch, b);
                scratch.swap(a, b);
                if hit {
                    return Some((a, b));
                }
            }
        }
    }

    None
}

/// True when `pos` is part of a vertical or horizontal run of three or more.
#[must_use]
pub fn run_through(grid: &Grid, pos: Position) -> bool {
    let kind = grid.tile_type(pos);
    let size = grid.size();
    let same = |p: Position| grid.tile_type(p) == kind;

    let up = (0..pos.row).rev().take_while(|&r| same(Position::new(pos.column, r))).count();
    let down = (pos.row + 1..size).take_while(|&r| same(Position::new(pos.column, r))).count();
    if up + down + 1 >= 3 {
        return true;
    }

    let left = (0..pos.column).rev().take_while(|&c| same(Position::new(c, pos.row))).count();
    let right = (pos.column + 1..size).take_while(|&c| same(Position::new(c, pos.row))).count();
    left + right + 1 >= 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileIdAllocator;

    fn grid(columns: &[Vec<u8>]) -> Grid {
        Grid::from_columns(columns, &mut TileIdAllocator::new()).unwrap()
    }

    #[test]
    fn test_sixteen_templates() {
        let all = templates();
        assert_eq!(all.len(), 16);
        // Three flagged cells per template
        assert!(all.iter().all(|t| t.cells.len() == 3));
    }

    #[test]
    fn test_templates_built_once() {
        assert!(std::ptr::eq(templates(), templates()));
        assert_eq!(templates(), build_templates().as_slice());
    }

    #[test]
    fn test_rotation_dimensions() {
        let mask = vec![vec![1, 1, 0, 1]];
        let once = rotate(&mask);
        assert_eq!(once.len(), 4);
        assert_eq!(once[0].len(), 1);
        let back = rotate(&rotate(&rotate(&once)));
        assert_eq!(back, mask);
    }

    #[test]
    fn test_dead_board() {
        // Checkerboard of three types with no near-matches
        let g = grid(&[vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]);
        assert!(!has_possible_moves(&g));
        assert!(!has_possible_moves_brute_force(&g));
        assert_eq!(find_possible_move(&g), None);
    }

    #[test]
    fn test_gap_in_line_detected() {
        // Column 0 reads 1, 1, 2, 1 top to bottom: swap rows 2 and 3
        let g = grid(&[
            vec![1, 1, 2, 1],
            vec![2, 3, 4, 2],
            vec![3, 4, 2, 3],
            vec![4, 2, 3, 4],
        ]);
        assert!(has_possible_moves(&g));
        assert_eq!(
            find_possible_move(&g),
            Some((Position::new(0, 2), Position::new(0, 3)))
        );
    }

    #[test]
    fn test_side_step_detected() {
        // Column 1 reads 2, 3, 2; the 2 at (0, 1) can step into the gap
        let g = grid(&[vec![1, 2, 3], vec![2, 3, 1], vec![3, 2, 4]]);
        assert!(has_possible_moves(&g));
        assert!(has_possible_moves_brute_force(&g));
    }

    #[test]
    fn test_run_through() {
        let g = grid(&[vec![1, 1, 1], vec![2, 3, 2], vec![3, 2, 3]]);
        assert!(run_through(&g, Position::new(0, 1)));
        assert!(!run_through(&g, Position::new(1, 1)));
    }
}
