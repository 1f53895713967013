//! Match detection and scoring.
//!
//! - `matcher`: finds runs of three or more identical tiles per row/column
//! - `scoring`: turns runs into points

pub mod matcher;
pub mod scoring;

pub use matcher::{find_matches, has_matches, scan_line, Axis, MatchSet, Run, MIN_RUN};
pub use scoring::{run_score, score_runs};
