//! Board transitions applied by the cascade loop.
//!
//! - `gravity`: clear matched cells, sink survivors, spawn replacements
//! - `deadlock`: detect whether any swap can still create a match
//! - `shuffle`: permute tiles when the board is dead

pub mod gravity;
pub mod deadlock;
pub mod shuffle;

pub use gravity::apply_gravity;
pub use deadlock::{
    find_possible_move, has_possible_moves, has_possible_moves_brute_force, run_through,
};
pub use shuffle::shuffle_grid;
