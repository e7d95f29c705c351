//! Worst-case criterion
//!
//! Scores a guess by its smallest non-empty part and prefers the guess whose
//! smallest part is largest. A guess that leaves every code in one part tells
//! nothing and scores 0; otherwise it would always win with the whole set as
//! its only part.

use super::Criterion;
use crate::solver::Partition;

/// Maximize the minimum non-empty partition size
///
/// A guess with a single non-empty part scores 0. Taken as its minimum, that
/// part would be the whole consistent set and the guess would always win
/// without narrowing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Criterion for Minimax {
    type Score = usize;

    const NAME: &'static str = "minimax";

    /// Smallest non-empty part, or 0 when fewer than two parts are non-empty
    fn score(&self, partition: &Partition) -> usize {
        let mut parts = 0;
        let mut minimum = usize::MAX;
        for part in partition.non_empty() {
            parts += 1;
            minimum = minimum.min(part.size);
        }
        if parts < 2 { 0 } else { minimum }
    }

    fn better(&self, a: usize, b: usize) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Universe};

    #[test]
    fn empty_parts_do_not_count_as_minimum() {
        let universe = Universe::new(2).unwrap();
        let guess: Code = "0,1".parse().unwrap();
        let partition = Partition::compute(&guess, universe.codes(), universe.feedbacks());

        // The perfect part holds only the guess itself
        assert_eq!(Minimax.score(&partition), 1);
        assert!(partition.parts().iter().all(|p| p.size > 0));
    }

    #[test]
    fn guess_outside_the_set_can_score_higher() {
        let universe = Universe::new(2).unwrap();
        let consistent: Vec<Code> = ["0,1", "1,0", "2,3", "3,2"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        // Splits into {01,10} and {23,32}
        let pairing: Code = "0,0".parse().unwrap();
        let paired = Partition::compute(&pairing, &consistent, universe.feedbacks());
        assert_eq!(Minimax.score(&paired), 2);

        // Identifies itself, leaving singletons around
        let member: Code = "0,1".parse().unwrap();
        let split = Partition::compute(&member, &consistent, universe.feedbacks());
        assert_eq!(Minimax.score(&split), 1);

        assert!(Minimax.better(2, 1));
        assert!(!Minimax.better(1, 1));
    }

    #[test]
    fn uninformative_guess_scores_zero() {
        let universe = Universe::new(2).unwrap();
        let consistent: Vec<Code> = ["1,1", "2,2", "3,3"].iter().map(|s| s.parse().unwrap()).collect();
        let partition = Partition::compute(&"0,0".parse().unwrap(), &consistent, universe.feedbacks());

        assert_eq!(partition.non_empty().count(), 1);
        assert_eq!(Minimax.score(&partition), 0);
    }

    #[test]
    fn empty_consistent_set_scores_zero() {
        let universe = Universe::new(2).unwrap();
        let partition = Partition::compute(&universe.first(), &[], universe.feedbacks());
        assert_eq!(Minimax.score(&partition), 0);
    }
}
