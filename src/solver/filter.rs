//! Consistency filtering
//!
//! A code is consistent with a played guess if, were it the secret, it would
//! have produced the observed feedback. Both variants keep survivors in their
//! original relative order, which the first-element tie-breaks rely on.

use crate::core::{Code, Feedback};

/// Whether `code` would have answered `guess` with `feedback`
#[inline]
#[must_use]
pub fn is_consistent(code: &Code, guess: &Code, feedback: Feedback) -> bool {
    Feedback::calculate(guess, code) == feedback
}

/// Codes from `codes` consistent with `(guess, feedback)`; the input is untouched
///
/// # Examples
/// ```
/// use robot_mastermind::core::{Code, Feedback, Universe};
/// use robot_mastermind::solver::filter_consistent;
///
/// let universe = Universe::new(2).unwrap();
/// let guess: Code = "0,1".parse().unwrap();
///
/// let swapped = filter_consistent(universe.codes(), &guess, Feedback::new(0, 2));
/// assert_eq!(swapped, vec!["1,0".parse::<Code>().unwrap()]);
/// ```
#[must_use]
pub fn filter_consistent(codes: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    codes
        .iter()
        .filter(|code| is_consistent(code, guess, feedback))
        .copied()
        .collect()
}

/// Drop the codes inconsistent with `(guess, feedback)` in place
///
/// Returns the number of removed codes.
pub fn retain_consistent(codes: &mut Vec<Code>, guess: &Code, feedback: Feedback) -> usize {
    let before = codes.len();
    codes.retain(|code| is_consistent(code, guess, feedback));
    before - codes.len()
}
