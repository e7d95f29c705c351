//! Scoring criteria for candidate guesses
//!
//! A criterion reduces the partition a candidate guess induces on the
//! consistent set to a single score, and says which of two scores is better.
//! The selection skeleton in `selection` does the rest.

mod entropy;
mod expected_size;
mod minimax;
mod most_parts;

pub use entropy::Entropy;
pub use expected_size::ExpectedSize;
pub use minimax::Minimax;
pub use most_parts::MostParts;

use super::Partition;
use std::fmt::Debug;

/// A rule ranking candidate guesses by the partition they induce
pub trait Criterion: Sync {
    /// Score type; ties are detected with `==`
    type Score: Copy + PartialEq + Debug + Send;

    /// Short name used in logs
    const NAME: &'static str;

    /// Score one candidate from its partition of the consistent set
    fn score(&self, partition: &Partition) -> Self::Score;

    /// Whether score `a` is strictly better than `b`
    fn better(&self, a: Self::Score, b: Self::Score) -> bool;

    /// Re-select by travel distance alone when the last feedback removed no code
    fn reselect_on_stall(&self) -> bool {
        false
    }
}
