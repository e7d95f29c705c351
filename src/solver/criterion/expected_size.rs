//! Expected remaining size criterion
//!
//! E = Σ size² / total: the expected size of the consistent set after the guess
//! if the secret is uniformly distributed over it. Lower is better.

use super::Criterion;
use crate::solver::Partition;

/// Minimize the expected size of the next consistent set
///
/// When the previous feedback removed nothing, the scoring search is skipped and
/// the next guess is the consistent code closest to the robot. Pure scoring can
/// keep proposing codes outside the consistent set in that state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectedSize;

impl Criterion for ExpectedSize {
    type Score = f64;

    const NAME: &'static str = "expected-size";

    fn score(&self, partition: &Partition) -> f64 {
        let total = partition.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        partition
            .non_empty()
            .map(|part| {
                let size = part.size as f64;
                size * size / total
            })
            .sum()
    }

    fn better(&self, a: f64, b: f64) -> bool {
        a < b
    }

    fn reselect_on_stall(&self) -> bool {
        true
    }
}
