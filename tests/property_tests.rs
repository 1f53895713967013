//! Property tests for the board transitions and the engine loop.

use proptest::prelude::*;

use match3_engine::resolve::has_possible_moves_brute_force;
use match3_engine::{
    apply_gravity, find_matches, has_possible_moves, shuffle_grid, BoardEngine, EngineConfig,
    GameRng, Grid, SwapResult, TileId, TileIdAllocator,
};

/// Square boards given as `columns[c][r]`.
fn arb_columns() -> impl Strategy<Value = (Vec<Vec<u8>>, u8)> {
    (3usize..=8, 3u8..=6).prop_flat_map(|(size, types)| {
        (
            prop::collection::vec(prop::collection::vec(1..=types, size), size),
            Just(types),
        )
    })
}

fn settle(grid: &mut Grid, tile_types: u8, rng: &mut GameRng, ids: &mut TileIdAllocator) {
    loop {
        let matches = find_matches(grid);
        if matches.is_empty() {
            break;
        }
        apply_gravity(grid, &matches, tile_types, rng, ids);
    }
}

// =============================================================================
// Gravity Properties
// =============================================================================

proptest! {
    #[test]
    fn test_gravity_conserves_cells((columns, types) in arb_columns(), seed in any::<u64>()) {
        let mut ids = TileIdAllocator::new();
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::from_columns(&columns, &mut ids).unwrap();
        let before = grid.clone();
        let matches = find_matches(&grid);
        let cleared = matches.cells();

        let report = apply_gravity(&mut grid, &matches, types, &mut rng, &mut ids);

        prop_assert!(grid.is_settled_full());
        prop_assert_eq!(grid.len(), before.len());
        prop_assert_eq!(report.removed.len(), cleared.len());
        prop_assert_eq!(report.spawned.len(), cleared.len());
        for spawned in &report.spawned {
            prop_assert!(spawned.spawn_row < 0);
            prop_assert!(spawned.kind.raw() >= 1 && spawned.kind.raw() <= types);
        }
    }

    #[test]
    fn test_gravity_preserves_survivor_order(
        (columns, types) in arb_columns(),
        seed in any::<u64>(),
    ) {
        let mut ids = TileIdAllocator::new();
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::from_columns(&columns, &mut ids).unwrap();
        let before = grid.clone();
        let matches = find_matches(&grid);
        let cleared = matches.cells();

        apply_gravity(&mut grid, &matches, types, &mut rng, &mut ids);

        let size = grid.size();
        for column in 0..size {
            let survivors: Vec<TileId> = before
                .column(column)
                .iter()
                .enumerate()
                .filter(|(row, _)| !cleared.contains(&match3_engine::Position::new(column, *row)))
                .map(|(_, tile)| tile.id)
                .collect();
            let bottom: Vec<TileId> = grid.column(column)[size - survivors.len()..]
                .iter()
                .map(|tile| tile.id)
                .collect();
            prop_assert_eq!(survivors, bottom);
        }
    }
}

// =============================================================================
// Deadlock Detection Properties
// =============================================================================

proptest! {
    #[test]
    fn test_template_scan_agrees_with_brute_force(
        (columns, types) in arb_columns(),
        seed in any::<u64>(),
    ) {
        let mut ids = TileIdAllocator::new();
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::from_columns(&columns, &mut ids).unwrap();
        settle(&mut grid, types, &mut rng, &mut ids);

        prop_assert_eq!(has_possible_moves(&grid), has_possible_moves_brute_force(&grid));
    }

    #[test]
    fn test_shuffle_is_a_permutation((columns, _types) in arb_columns(), seed in any::<u64>()) {
        let mut ids = TileIdAllocator::new();
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::from_columns(&columns, &mut ids).unwrap();

        let mut before: Vec<_> = grid.tiles().iter().map(|t| (t.id, t.kind)).collect();
        shuffle_grid(&mut grid, &mut rng);
        let mut after: Vec<_> = grid.tiles().iter().map(|t| (t.id, t.kind)).collect();

        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }
}

// =============================================================================
// Engine Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_engine_invariants_hold_across_moves(
        size in 3usize..=10,
        types in 3u8..=6,
        seed in any::<u64>(),
    ) {
        let config = EngineConfig::default()
            .with_field_size(size)
            .with_tile_types(types)
            .with_moves(5)
            .with_seed(seed);
        let mut engine = BoardEngine::new(config).unwrap();
        engine.start();

        let mut score = engine.score();
        for remaining in (0..5).rev() {
            let grid = engine.grid().unwrap();
            prop_assert!(find_matches(grid).is_empty());
            prop_assert!(has_possible_moves(grid));

            let (a, b) = engine.hint().unwrap();
            let result = engine.request_swap(a, b);
            let is_resolved = matches!(
                result,
                SwapResult::Resolved { moves_remaining, score_delta, .. }
                    if moves_remaining == remaining && score_delta >= 1
            );
            prop_assert!(is_resolved);
            prop_assert!(engine.score() > score);
            score = engine.score();
        }
        prop_assert_eq!(engine.session().moves_made(), 5);
    }
}
