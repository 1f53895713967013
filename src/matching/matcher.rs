//! Run detection along rows and columns.
//!
//! Every column and every row goes through the same single-line scan.
//! Column runs and row runs are reported separately; a cell shared by a
//! vertical and a horizontal run shows up in both.

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Grid, Position};

/// Shortest line segment that counts as a match.
pub const MIN_RUN: usize = 3;

/// Direction a run extends in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Vertical run inside one column (consecutive rows).
    Column,
    /// Horizontal run inside one row (consecutive columns).
    Row,
}

/// A match: three or more identical tiles in a straight line.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    /// Direction of the run.
    pub axis: Axis,
    /// Column index for vertical runs, row index for horizontal runs.
    pub line: usize,
    /// First index along the line.
    pub start: usize,
    /// Number of cells covered.
    pub len: usize,
}

impl Run {
    /// Last index along the line (inclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len - 1
    }

    /// Cells covered by the run, in scan order.
    #[must_use]
    pub fn positions(&self) -> SmallVec<[Position; 8]> {
        (self.start..=self.end())
            .map(|i| match self.axis {
                Axis::Column => Position::new(self.line, i),
                Axis::Row => Position::new(i, self.line),
            })
            .collect()
    }
}

/// Runs found in one pass over the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    /// Vertical runs, ordered by column then start row.
    pub columns: Vec<Run>,
    /// Horizontal runs, ordered by row then start column.
    pub rows: Vec<Run>,
}

impl MatchSet {
    /// True when no run was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// Total number of runs (column + row).
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len() + self.rows.len()
    }

    /// All runs, column runs first.
    pub fn iter(&self) -> impl Iterator<Item = &Run> {
        self.columns.iter().chain(self.rows.iter())
    }

    /// Distinct cells covered by any run.
    #[must_use]
    pub fn cells(&self) -> FxHashSet<Position> {
        self.iter().flat_map(|run| run.positions()).collect()
    }
}

/// Find every run of `MIN_RUN` or more equal values in a line.
///
/// Returns inclusive index ranges in left-to-right order. A run reaching the
/// end of the line is flushed too.
///
/// ```
/// use match3_engine::matching::scan_line;
///
/// assert_eq!(scan_line(&[1, 1, 1, 2, 2]), vec![0..=2]);
/// assert_eq!(scan_line(&[1, 1, 1, 1]), vec![0..=3]);
/// assert!(scan_line(&[1, 1, 2, 2]).is_empty());
/// ```
pub fn scan_line<T: PartialEq>(line: &[T]) -> Vec<RangeInclusive<usize>> {
    let mut runs = Vec::new();
    let mut run_start = 0;

    for i in 1..=line.len() {
        let continues = i < line.len() && line[i] == line[run_start];
        if !continues {
            if i - run_start >= MIN_RUN {
                runs.push(run_start..=i - 1);
            }
            run_start = i;
        }
    }

    runs
}

/// Scan every column and every row of the grid for runs.
#[must_use]
pub fn find_matches(grid: &Grid) -> MatchSet {
    let size = grid.size();
    let mut set = MatchSet::default();

    for line in 0..size {
        collect_runs(&grid.column_types(line), Axis::Column, line, &mut set.columns);
    }
    for line in 0..size {
        collect_runs(&grid.row_types(line), Axis::Row, line, &mut set.rows);
    }

    set
}

/// True when the grid holds at least one run.
#[must_use]
pub fn has_matches(grid: &Grid) -> bool {
    !find_matches(grid).is_empty()
}

fn collect_runs<T: PartialEq>(types: &[T], axis: Axis, line: usize, out: &mut Vec<Run>) {
    out.extend(scan_line(types).into_iter().map(|range| Run {
        axis,
        line,
        start: *range.start(),
        len: range.end() - range.start() + 1,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileIdAllocator;

    fn grid(columns: &[Vec<u8>]) -> Grid {
        Grid::from_columns(columns, &mut TileIdAllocator::new()).unwrap()
    }

    #[test]
    fn test_scan_line_single_run() {
        assert_eq!(scan_line(&[1, 1, 1, 2, 2]), vec![0..=2]);
    }

    #[test]
    fn test_scan_line_trailing_run_flushed() {
        assert_eq!(scan_line(&[1, 1, 1, 1]), vec![0..=3]);
        assert_eq!(scan_line(&[2, 1, 1, 1]), vec![1..=3]);
    }

    #[test]
    fn test_scan_line_no_runs() {
        assert!(scan_line(&[1, 1, 2, 2]).is_empty());
        assert!(scan_line::<u8>(&[]).is_empty());
        assert!(scan_line(&[4]).is_empty());
    }

    #[test]
    fn test_scan_line_multiple_runs() {
        assert_eq!(
            scan_line(&[3, 3, 3, 1, 2, 2, 2, 2, 5]),
            vec![0..=2, 4..=7]
        );
    }

    #[test]
    fn test_find_matches_column_and_row() {
        // Column 0 starts with three 1s, row 2 ends with three 2s
        let g = grid(&[
            vec![1, 1, 1, 4],
            vec![2, 3, 2, 3],
            vec![3, 4, 2, 4],
            vec![4, 3, 2, 3],
        ]);
        let set = find_matches(&g);

        assert_eq!(
            set.columns,
            vec![Run {
                axis: Axis::Column,
                line: 0,
                start: 0,
                len: 3,
            }]
        );
        assert_eq!(
            set.rows,
            vec![Run {
                axis: Axis::Row,
                line: 2,
                start: 1,
                len: 3,
            }]
        );
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_overlapping_runs_both_reported() {
        // Cross shape of 1s centred on (1, 1)
        let g = grid(&[vec![2, 1, 3], vec![1, 1, 1], vec![3, 1, 2]]);
        let set = find_matches(&g);

        assert_eq!(set.columns.len(), 1);
        assert_eq!(set.rows.len(), 1);
        // Shared centre counted once in the distinct cell set
        assert_eq!(set.cells().len(), 5);
    }

    #[test]
    fn test_diagonal_ignored() {
        let g = grid(&[vec![1, 2, 3], vec![2, 1, 2], vec![3, 2, 1]]);
        assert!(find_matches(&g).is_empty());
        assert!(!has_matches(&g));
    }

    #[test]
    fn test_run_positions() {
        let run = Run {
            axis: Axis::Row,
            line: 4,
            start: 2,
            len: 3,
        };
        assert_eq!(run.end(), 4);
        assert_eq!(
            run.positions().as_slice(),
            &[Position::new(2, 4), Position::new(3, 4), Position::new(4, 4)]
        );
    }
}
