//! Shared guess-selection skeleton
//!
//! Every criterion strategy picks its next guess the same way:
//! 1. Score every code of the guess pool against the consistent set
//! 2. Keep all codes reaching the best score, in pool order
//! 3. Narrow those to codes that are still consistent, if any are
//! 4. Take the one the robot reaches with the least travel, first on ties

use super::criterion::Criterion;
use super::partition::Partition;
use crate::core::{Button, Code, Feedback, travel_distance};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Best-scoring codes of a guess pool
#[derive(Debug, Clone)]
pub struct BestGuesses<S> {
    /// Codes reaching the best score, in pool order
    pub codes: Vec<Code>,
    /// The best score, or `None` for an empty pool
    pub score: Option<S>,
}

/// Score every code of `guess_pool` and keep all that reach the best score
///
/// Scores are computed in parallel but reduced in pool order, so ties come
/// out in enumeration order and the result does not depend on scheduling.
///
/// # Examples
/// ```
/// use robot_mastermind::core::{Code, Feedback, Universe};
/// use robot_mastermind::solver::{Minimax, best_guesses, filter_consistent};
///
/// let universe = Universe::new(2).unwrap();
/// let consistent = filter_consistent(
///     universe.codes(),
///     &"0,1".parse().unwrap(),
///     Feedback::new(0, 0),
/// );
///
/// let best = best_guesses(&Minimax, universe.codes(), &consistent, universe.feedbacks());
/// assert!(!best.codes.is_empty());
/// assert!(best.score.is_some());
/// ```
#[must_use]
pub fn best_guesses<C: Criterion>(
    criterion: &C,
    guess_pool: &[Code],
    consistent: &[Code],
    feedbacks: &[Feedback],
) -> BestGuesses<C::Score> {
    let scores: Vec<C::Score> = guess_pool
        .par_iter()
        .map(|guess| criterion.score(&Partition::compute(guess, consistent, feedbacks)))
        .collect();

    let mut best: Option<C::Score> = None;
    let mut codes = Vec::new();

    for (code, score) in guess_pool.iter().zip(scores) {
        match best {
            Some(current) if criterion.better(score, current) => {
                best = Some(score);
                codes.clear();
                codes.push(*code);
            }
            Some(current) if score == current => codes.push(*code),
            Some(_) => {}
            None => {
                best = Some(score);
                codes.push(*code);
            }
        }
    }

    BestGuesses { codes, score: best }
}

/// Keep the codes that are also consistent, unless none are
#[must_use]
pub fn prefer_consistent(candidates: Vec<Code>, consistent: &[Code]) -> Vec<Code> {
    let members: FxHashSet<&Code> = consistent.iter().collect();
    let narrowed: Vec<Code> = candidates
        .iter()
        .filter(|code| members.contains(code))
        .copied()
        .collect();

    if narrowed.is_empty() {
        candidates
    } else {
        narrowed
    }
}

/// Code with the least travel from `from`; the first one on ties
///
/// Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use robot_mastermind::core::{Button, Code};
/// use robot_mastermind::solver::shortest_code;
///
/// let codes: Vec<Code> = ["0,1", "3,3", "3,4"].iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(shortest_code(&codes, Some(Button::T3)), Some(codes[1]));
/// ```
#[must_use]
pub fn shortest_code(codes: &[Code], from: Option<Button>) -> Option<Code> {
    let mut best: Option<(Code, f64)> = None;
    for code in codes {
        let distance = travel_distance(from, code);
        if best.is_none_or(|(_, shortest)| distance < shortest) {
            best = Some((*code, distance));
        }
    }
    best.map(|(code, _)| code)
}

/// Final pick among equally good codes
///
/// With `tie_break` the robot's travel decides; without it the first code wins.
#[must_use]
pub fn choose(codes: &[Code], from: Option<Button>, tie_break: bool) -> Option<Code> {
    if tie_break {
        shortest_code(codes, from)
    } else {
        codes.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;
    use crate::solver::criterion::{Entropy, ExpectedSize, Minimax, MostParts};
    use crate::solver::filter_consistent;

    fn narrowed(universe: &Universe) -> Vec<Code> {
        let secret: Code = "6,2,2".parse().unwrap();
        let guess = universe.first();
        filter_consistent(universe.codes(), &guess, Feedback::calculate(&guess, &secret))
    }

    fn sorted(mut codes: Vec<Code>, universe: &Universe) -> Vec<usize> {
        let mut indices: Vec<usize> = codes.drain(..).map(|c| universe.index_of(&c).unwrap()).collect();
        indices.sort_unstable();
        indices
    }

    fn assert_order_invariant<C: Criterion>(criterion: &C) {
        let universe = Universe::new(3).unwrap();
        let consistent = narrowed(&universe);

        let forward = best_guesses(criterion, universe.codes(), &consistent, universe.feedbacks());

        let mut reversed_pool = universe.codes().to_vec();
        reversed_pool.reverse();
        let mut reversed_consistent = consistent.clone();
        reversed_consistent.reverse();
        let backward = best_guesses(criterion, &reversed_pool, &reversed_consistent, universe.feedbacks());

        assert_eq!(forward.score, backward.score, "{}", C::NAME);
        assert_eq!(
            sorted(forward.codes, &universe),
            sorted(backward.codes, &universe),
            "{}",
            C::NAME
        );
    }

    #[test]
    fn minimax_is_order_invariant() {
        assert_order_invariant(&Minimax);
    }

    #[test]
    fn entropy_is_order_invariant() {
        assert_order_invariant(&Entropy);
    }

    #[test]
    fn expected_size_is_order_invariant() {
        assert_order_invariant(&ExpectedSize);
    }

    #[test]
    fn most_parts_is_order_invariant() {
        // Part identity uses first members, and every part's first member is
        // distinct under any order, so only sizes decide
        assert_order_invariant(&MostParts);
    }

    #[test]
    fn uninformative_ties_are_kept_in_pool_order() {
        let universe = Universe::new(2).unwrap();
        let consistent = vec![universe.first()];

        // One consistent code: every guess leaves a single part and scores 0
        let best = best_guesses(&Minimax, universe.codes(), &consistent, universe.feedbacks());
        assert_eq!(best.score, Some(0));
        assert_eq!(best.codes, universe.codes());
    }

    #[test]
    fn separating_ties_are_kept_in_pool_order() {
        let universe = Universe::new(2).unwrap();
        let consistent: Vec<Code> = ["0,0", "1,1"].iter().map(|s| s.parse().unwrap()).collect();

        let best = best_guesses(&Entropy, universe.codes(), &consistent, universe.feedbacks());

        // Any guess telling the two codes apart gains exactly one bit
        let separating: Vec<Code> = universe
            .codes()
            .iter()
            .copied()
            .filter(|guess| {
                Partition::compute(guess, &consistent, universe.feedbacks())
                    .non_empty()
                    .count()
                    == 2
            })
            .collect();
        assert_eq!(best.score, Some(1.0));
        assert!(separating.len() > 1);
        assert!(separating.len() < universe.len());
        assert_eq!(best.codes, separating);
    }

    #[test]
    fn empty_pool_has_no_best() {
        let universe = Universe::new(2).unwrap();
        let best = best_guesses(&Entropy, &[], universe.codes(), universe.feedbacks());
        assert!(best.codes.is_empty());
        assert!(best.score.is_none());
    }

    #[test]
    fn prefer_consistent_narrows_when_possible() {
        let a: Code = "0,1".parse().unwrap();
        let b: Code = "2,3".parse().unwrap();
        let c: Code = "4,5".parse().unwrap();

        assert_eq!(prefer_consistent(vec![a, b, c], &[c, b]), vec![b, c]);
        assert_eq!(prefer_consistent(vec![a], &[c]), vec![a]);
    }

    #[test]
    fn shortest_code_prefers_first_on_equal_distance() {
        // T0-T1 and T1-T0 are equally far from the center
        let codes: Vec<Code> = ["0,1", "1,0"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(shortest_code(&codes, None), Some(codes[0]));
        assert_eq!(shortest_code(&[], None), None);
    }

    #[test]
    fn choose_without_tie_break_takes_first() {
        let codes: Vec<Code> = ["0,1", "3,3"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(choose(&codes, Some(Button::T3), false), Some(codes[0]));
        assert_eq!(choose(&codes, Some(Button::T3), true), Some(codes[1]));
    }
}
