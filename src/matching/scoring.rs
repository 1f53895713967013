//! Score calculation for matched runs.
//!
//! | Run length | Points |
//! |------------|--------|
//! | 3          | 1      |
//! | 4          | 2      |
//! | 5+         | 6      |

use super::matcher::Run;

/// Points awarded for a single run of `len` tiles.
///
/// Lengths below three never come out of the matcher and score nothing.
#[must_use]
pub const fn run_score(len: usize) -> u64 {
    match len {
        0..=2 => 0,
        3 => 1,
        4 => 2,
        _ => 6,
    }
}

/// Total points for a collection of runs.
pub fn score_runs<'a>(runs: impl IntoIterator<Item = &'a Run>) -> u64 {
    runs.into_iter().map(|run| run_score(run.len)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::Axis;

    fn run(len: usize) -> Run {
        Run {
            axis: Axis::Row,
            line: 0,
            start: 0,
            len,
        }
    }

    #[test]
    fn test_run_score_table() {
        assert_eq!(run_score(3), 1);
        assert_eq!(run_score(4), 2);
        assert_eq!(run_score(5), 6);
        assert_eq!(run_score(9), 6);
    }

    #[test]
    fn test_short_runs_score_nothing() {
        assert_eq!(run_score(0), 0);
        assert_eq!(run_score(2), 0);
    }

    #[test]
    fn test_score_mixed_lengths() {
        let runs = [run(3), run(4), run(5)];
        assert_eq!(score_runs(&runs), 9);
    }

    #[test]
    fn test_score_empty() {
        let runs: Vec<Run> = Vec::new();
        assert_eq!(score_runs(&runs), 0);
    }
}
