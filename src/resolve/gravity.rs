//! Clearing matched tiles and refilling from the top.
//!
//! Each column is rebuilt as `[fresh tiles] ++ [kept tiles]`. Survivors keep
//! their top-to-bottom order and sink to the lowest free slots; fresh tiles
//! fill the vacated top rows.

use crate::core::{Grid, Position, Tile, TileIdAllocator, TileSource};
use crate::engine::events::{GravityReport, SpawnedTile, TileMove};
use crate::matching::MatchSet;

/// Remove every cell covered by `matches` and let the columns settle.
///
/// Column and row runs may overlap; a shared cell is cleared once.
/// New tile types are drawn from `source`, column by column, top row first.
pub fn apply_gravity(
    grid: &mut Grid,
    matches: &MatchSet,
    tile_types: u8,
    source: &mut impl TileSource,
    ids: &mut TileIdAllocator,
) -> GravityReport {
    for pos in matches.cells() {
        grid[pos].removed = true;
    }

    let size = grid.size();
    let mut report = GravityReport::default();

    for column in 0..size {
        let current = grid.column(column);
        if current.iter().all(|t| !t.removed) {
            continue;
        }

        let mut kept: Vec<(usize, Tile)> = Vec::with_capacity(size);
        for (row, tile) in current.iter().enumerate() {
            if tile.removed {
                report.removed.push(Position::new(column, row));
            } else {
                kept.push((row, *tile));
            }
        }

        let fresh = size - kept.len();
        let mut rebuilt = Vec::with_capacity(size);

        for row in 0..fresh {
            let tile = Tile::new(ids.allocate(), source.next_tile_type(tile_types));
            report.spawned.push(SpawnedTile {
                id: tile.id,
                kind: tile.kind,
                position: Position::new(column, row),
                spawn_row: row as isize - fresh as isize,
            });
            rebuilt.push(tile);
        }

        for (offset, (old_row, tile)) in kept.into_iter().enumerate() {
            let new_row = fresh + offset;
            if new_row != old_row {
                report.moved.push(TileMove {
                    id: tile.id,
                    kind: tile.kind,
                    from: Position::new(column, old_row),
                    to: Position::new(column, new_row),
                });
            }
            rebuilt.push(tile);
        }

        debug_assert_eq!(rebuilt.len(), size, "column height must be conserved");
        grid.column_mut(column).copy_from_slice(&rebuilt);
    }

    debug_assert!(grid.is_settled_full());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileType;
    use crate::matching::find_matches;

    /// Hands out tile types from a fixed list, in order.
    struct Scripted(Vec<u8>);

    impl TileSource for Scripted {
        fn next_tile_type(&mut self, _tile_types: u8) -> TileType {
            TileType::new(self.0.remove(0))
        }

        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn grid(columns: &[Vec<u8>], ids: &mut TileIdAllocator) -> Grid {
        Grid::from_columns(columns, ids).unwrap()
    }

    #[test]
    fn test_vertical_run_refilled_from_top() {
        let mut ids = TileIdAllocator::new();
        let mut g = grid(
            &[
                vec![4, 1, 1, 1],
                vec![2, 3, 2, 3],
                vec![3, 2, 3, 2],
                vec![2, 3, 2, 3],
            ],
            &mut ids,
        );
        let matches = find_matches(&g);
        let survivor = g[Position::new(0, 0)].id;

        let report = apply_gravity(&mut g, &matches, 5, &mut Scripted(vec![5, 4, 5]), &mut ids);

        assert_eq!(g.to_columns()[0], vec![5, 4, 5, 4]);
        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.spawned.len(), 3);
        assert_eq!(report.spawned[0].spawn_row, -3);
        assert_eq!(
            report.moved,
            vec![TileMove {
                id: survivor,
                kind: TileType(4),
                from: Position::new(0, 0),
                to: Position::new(0, 3),
            }]
        );
    }

    #[test]
    fn test_horizontal_run_drops_each_column_by_one() {
        let mut ids = TileIdAllocator::new();
        // Row 2 holds three 1s
        let mut g = grid(&[vec![2, 3, 1], vec![3, 2, 1], vec![2, 3, 1]], &mut ids);
        let matches = find_matches(&g);

        let report = apply_gravity(&mut g, &matches, 5, &mut Scripted(vec![4, 5, 4]), &mut ids);

        assert_eq!(g.to_columns(), vec![vec![4, 2, 3], vec![5, 3, 2], vec![4, 2, 3]]);
        assert_eq!(report.removed.len(), 3);
        assert_eq!(report.moved.len(), 6);
        assert!(report.moved.iter().all(|m| m.to.row == m.from.row + 1));
    }

    #[test]
    fn test_overlap_cleared_once() {
        let mut ids = TileIdAllocator::new();
        let mut g = grid(&[vec![2, 1, 3], vec![1, 1, 1], vec![3, 1, 2]], &mut ids);
        let matches = find_matches(&g);
        assert_eq!(matches.len(), 2);

        let mut source = Scripted(vec![2, 3, 4, 5, 3]);
        let report = apply_gravity(&mut g, &matches, 5, &mut source, &mut ids);

        assert_eq!(report.removed.len(), 5);
        assert_eq!(report.spawned.len(), 5);
        assert!(g.is_settled_full());
    }

    #[test]
    fn test_kept_order_preserved() {
        let mut ids = TileIdAllocator::new();
        // Column 0: 2, 1, 3, 1, 1, 1 with the bottom three matched
        let mut g = grid(
            &[
                vec![2, 1, 3, 1, 1, 1],
                vec![3, 2, 4, 2, 3, 2],
                vec![4, 3, 2, 3, 2, 3],
                vec![3, 2, 4, 2, 3, 2],
                vec![4, 3, 2, 3, 2, 3],
                vec![2, 4, 3, 4, 4, 2],
            ],
            &mut ids,
        );
        let matches = find_matches(&g);
        assert_eq!(matches.len(), 1);

        apply_gravity(&mut g, &matches, 5, &mut Scripted(vec![5, 5, 4]), &mut ids);

        assert_eq!(g.to_columns()[0], vec![5, 5, 4, 2, 1, 3]);
        for column in 1..6 {
            assert_eq!(g.column(column).len(), 6);
        }
    }

    #[test]
    fn test_no_matches_no_changes() {
        let mut ids = TileIdAllocator::new();
        let mut g = grid(&[vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]], &mut ids);
        let before = g.clone();

        let none = MatchSet::default();
        let report = apply_gravity(&mut g, &none, 5, &mut Scripted(vec![]), &mut ids);

        assert_eq!(g, before);
        assert_eq!(report, GravityReport::default());
    }
}
