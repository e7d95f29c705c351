//! Most-parts criterion
//!
//! Counts the distinct parts a guess splits the consistent set into. A part
//! only counts as new when both its size and its first member differ from every
//! part already counted; parts come out of an order-preserving filter, so the
//! first member stands in for the part's identity.

use super::Criterion;
use crate::solver::Partition;

/// Maximize the number of distinct non-empty parts
#[derive(Debug, Clone, Copy, Default)]
pub struct MostParts;

impl Criterion for MostParts {
    type Score = usize;

    const NAME: &'static str = "most-parts";

    fn score(&self, partition: &Partition) -> usize {
        let mut seen: Vec<(usize, Option<usize>)> = Vec::new();
        for part in partition.non_empty() {
            let is_new = seen
                .iter()
                .all(|&(size, first)| size != part.size && first != part.first);
            if is_new {
                seen.push((part.size, part.first));
            }
        }
        seen.len()
    }

    fn better(&self, a: usize, b: usize) -> bool {
        a > b
    }
}
