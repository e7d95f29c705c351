//! Feedback calculation and enumeration
//!
//! Feedback is the pair (exact, wrong): buttons in the right position, and
//! buttons present in the reference but at another position. Scoring follows the
//! Mastermind convention: after removing exact matches, each remaining button of
//! the guess is matched against at most one remaining occurrence in the reference.

use super::code::Code;
use std::fmt;
use std::str::FromStr;

/// Answer to a guess: exact and wrong-position match counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    wrong: u8,
}

/// Error type for unparsable feedback text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackError(String);

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid feedback '{}' (expected two counts such as \"2 1\" or \"b2w1\")",
            self.0
        )
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, wrong: u8) -> Self {
        Self { exact, wrong }
    }

    /// Buttons in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Buttons present in the code but in another position
    #[inline]
    #[must_use]
    pub const fn wrong(self) -> u8 {
        self.wrong
    }

    /// Perfect match for codes of the given length
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, code_length: usize) -> bool {
        self.exact as usize == code_length
    }

    /// Whether this feedback can occur for codes of the given length
    #[must_use]
    pub const fn is_feasible(self, code_length: usize) -> bool {
        let exact = self.exact as usize;
        let wrong = self.wrong as usize;
        exact + wrong <= code_length && !(exact + 1 == code_length && wrong == 1)
    }

    /// Dense slot for lookup tables of size `(code_length + 1)^2`
    #[inline]
    #[must_use]
    pub const fn slot(self, code_length: usize) -> usize {
        self.exact as usize * (code_length + 1) + self.wrong as usize
    }

    /// Compare `guess` against `reference` (normally the secret)
    ///
    /// # Algorithm
    /// 1. Count exact position matches
    /// 2. For the unmatched positions, count each button on both sides
    /// 3. Wrong-position matches are the per-button minimum of those counts
    ///
    /// The result is symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::{Code, Feedback};
    ///
    /// let guess: Code = "0,0,1".parse().unwrap();
    /// let secret: Code = "1,0,2".parse().unwrap();
    ///
    /// // Middle T0 is exact; the leading T0 finds no unmatched T0 left; T1 is misplaced
    /// assert_eq!(Feedback::calculate(&guess, &secret), Feedback::new(1, 1));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, reference: &Code) -> Self {
        debug_assert_eq!(guess.len(), reference.len(), "codes must have equal length");

        let mut exact = 0u8;
        let mut guess_left = [0u8; super::BUTTON_COUNT];
        let mut reference_left = [0u8; super::BUTTON_COUNT];

        for (&g, &r) in guess.buttons().iter().zip(reference.buttons()) {
            if g == r {
                exact += 1;
            } else {
                guess_left[g.index()] += 1;
                reference_left[r.index()] += 1;
            }
        }

        let wrong = guess_left
            .iter()
            .zip(&reference_left)
            .map(|(&g, &r)| g.min(r))
            .sum();

        Self { exact, wrong }
    }

    /// All feasible feedback values for codes of the given length
    ///
    /// Every `(exact, wrong)` with `exact + wrong <= length`, ordered by `exact`
    /// then `wrong`, except `(length - 1, 1)`: when all but one position match
    /// exactly, the last one cannot be a misplaced match.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::Feedback;
    ///
    /// let all = Feedback::all(2);
    /// assert_eq!(
    ///     all,
    ///     vec![
    ///         Feedback::new(0, 0),
    ///         Feedback::new(0, 1),
    ///         Feedback::new(0, 2),
    ///         Feedback::new(1, 0),
    ///         Feedback::new(2, 0),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn all(code_length: usize) -> Vec<Self> {
        let mut result = Vec::new();
        for exact in 0..=code_length {
            for wrong in 0..=(code_length - exact) {
                // Bounded by MAX_CODE_LENGTH
                let feedback = Self::new(exact as u8, wrong as u8);
                if feedback.is_feasible(code_length) {
                    result.push(feedback);
                }
            }
        }
        result
    }

    /// Parse feedback such as `"2 1"`, `"2,1"`, `"2/1"`, `"b2w1"`, `"b:2 w:1"` or `"21"`
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("b:2 w:1").unwrap();
    /// let f2 = Feedback::from_str("2,1").unwrap();
    /// assert_eq!(f1, f2);
    /// assert_eq!(f1.to_string(), "b:2 w:1");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for the input loops; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let numbers: Vec<&str> = s
            .split(|c: char| !c.is_ascii_digit())
            .filter(|t| !t.is_empty())
            .collect();

        let (exact, wrong) = match numbers.as_slice() {
            [exact, wrong] => (exact.parse().ok()?, wrong.parse().ok()?),
            [pair] if pair.len() == 2 => {
                let mut digits = pair.chars().filter_map(|c| c.to_digit(10));
                (u8::try_from(digits.next()?).ok()?, u8::try_from(digits.next()?).ok()?)
            }
            _ => return None,
        };

        Some(Self::new(exact, wrong))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b:{} w:{}", self.exact, self.wrong)
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| FeedbackError(s.to_string()))
    }
}
