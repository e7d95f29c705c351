//! Shannon entropy criterion
//!
//! H = Σ p · log₂(1/p) over the non-empty parts, where p = size / total.
//! The guess with the highest expected information gain wins.

use super::Criterion;
use crate::solver::Partition;

/// Maximize the entropy of the feedback distribution
#[derive(Debug, Clone, Copy, Default)]
pub struct Entropy;

impl Criterion for Entropy {
    type Score = f64;

    const NAME: &'static str = "entropy";

    fn score(&self, partition: &Partition) -> f64 {
        let total = partition.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        partition
            .non_empty()
            .map(|part| {
                let p = part.size as f64 / total;
                p * (total / part.size as f64).log2()
            })
            .sum()
    }

    fn better(&self, a: f64, b: f64) -> bool {
        a > b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Universe};

    fn codes(texts: &[&str]) -> Vec<Code> {
        texts.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn uniform_split_gives_log2_of_parts() {
        let universe = Universe::new(2).unwrap();
        // Against 0,1 these give (2,0), (0,2), (0,0) and (1,0)
        let consistent = codes(&["0,1", "1,0", "5,5", "0,5"]);
        let partition = Partition::compute(&"0,1".parse().unwrap(), &consistent, universe.feedbacks());

        assert!((Entropy.score(&partition) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn uninformative_guess_scores_zero() {
        let universe = Universe::new(2).unwrap();
        let consistent = codes(&["0,0", "1,1", "2,2"]);
        let partition = Partition::compute(&"7,7".parse().unwrap(), &consistent, universe.feedbacks());

        assert_eq!(Entropy.score(&partition), 0.0);
    }

    #[test]
    fn bounded_by_log2_of_total() {
        let universe = Universe::new(3).unwrap();
        for guess in universe.codes().iter().step_by(29) {
            let partition = Partition::compute(guess, universe.codes(), universe.feedbacks());
            let entropy = Entropy.score(&partition);
            assert!(entropy > 0.0);
            assert!(entropy <= (universe.len() as f64).log2());
        }
    }

    #[test]
    fn empty_set_scores_zero() {
        let universe = Universe::new(2).unwrap();
        let partition = Partition::compute(&universe.first(), &[], universe.feedbacks());
        assert_eq!(Entropy.score(&partition), 0.0);
    }
}
