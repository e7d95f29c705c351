//! Partition of a consistent set by hypothetical feedback
//!
//! Scoring a candidate guess needs, for every feasible feedback value, the size
//! of `filter_consistent(consistent, candidate, feedback)`. Those sets are
//! disjoint and cover the consistent set, so all of them are collected in one
//! pass instead of one filter per feedback value.

use crate::core::{Code, Feedback};

/// One cell of a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Part {
    /// Feedback the candidate would receive from every member
    pub feedback: Feedback,
    /// Number of members
    pub size: usize,
    /// Position of the first member in the consistent set
    pub first: Option<usize>,
}

/// The consistent set split by the feedback a guess would receive
#[derive(Debug, Clone)]
pub struct Partition {
    parts: Vec<Part>,
    total: usize,
}

impl Partition {
    /// Split `consistent` by the feedback each member would give `guess`
    ///
    /// Parts follow the order of `feedbacks`; empty parts are kept with size 0.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::{Code, Universe};
    /// use robot_mastermind::solver::Partition;
    ///
    /// let universe = Universe::new(2).unwrap();
    /// let guess: Code = "0,1".parse().unwrap();
    /// let partition = Partition::compute(&guess, universe.codes(), universe.feedbacks());
    ///
    /// assert_eq!(partition.total(), 64);
    /// assert_eq!(partition.parts().iter().map(|p| p.size).sum::<usize>(), 64);
    /// ```
    #[must_use]
    pub fn compute(guess: &Code, consistent: &[Code], feedbacks: &[Feedback]) -> Self {
        let length = guess.len();
        let mut slots: Vec<(usize, Option<usize>)> = vec![(0, None); (length + 1) * (length + 1)];

        for (position, code) in consistent.iter().enumerate() {
            let slot = &mut slots[Feedback::calculate(guess, code).slot(length)];
            slot.0 += 1;
            slot.1.get_or_insert(position);
        }

        let parts = feedbacks
            .iter()
            .map(|&feedback| {
                let (size, first) = slots[feedback.slot(length)];
                Part {
                    feedback,
                    size,
                    first,
                }
            })
            .collect();

        Self {
            parts,
            total: consistent.len(),
        }
    }

    /// All parts, including empty ones
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Parts with at least one member
    pub fn non_empty(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(|part| part.size > 0)
    }

    /// Size of the consistent set that was split
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}
