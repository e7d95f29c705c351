//! The candidate universe
//!
//! All `8^length` codes of one length in canonical order, plus the feasible
//! feedback values for that length. Built once and shared read-only by every
//! strategy that plays with this length.

use super::button::BUTTON_COUNT;
use super::code::{Code, MAX_CODE_LENGTH};
use super::feedback::Feedback;
use std::fmt;

/// Error type for invalid construction parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCodeLength,
    CodeLengthTooLarge(usize),
    UnknownStrategy(String),
    LengthMismatch { expected: usize, actual: usize },
    InvalidParameter(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCodeLength => write!(f, "Code length must be at least 1"),
            Self::CodeLengthTooLarge(len) => write!(
                f,
                "Code length {len} is too large (at most {MAX_CODE_LENGTH} is supported)"
            ),
            Self::UnknownStrategy(name) => write!(f, "Unknown strategy '{name}'"),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "Universe holds codes of length {actual}, strategy expects {expected}"
            ),
            Self::InvalidParameter(message) => write!(f, "Invalid parameter: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check a code length against the supported range
///
/// # Errors
/// Returns `ConfigError` if `code_length` is 0 or above `MAX_CODE_LENGTH`.
pub(crate) fn validate_code_length(code_length: usize) -> Result<(), ConfigError> {
    if code_length == 0 {
        Err(ConfigError::ZeroCodeLength)
    } else if code_length > MAX_CODE_LENGTH {
        Err(ConfigError::CodeLengthTooLarge(code_length))
    } else {
        Ok(())
    }
}

/// Every code of a fixed length, in canonical order
///
/// Canonical order is lexicographic by position: position 0 varies slowest, so
/// index `i` spells `i` in base 8 with the most significant digit first.
#[derive(Debug, Clone)]
pub struct Universe {
    code_length: usize,
    codes: Vec<Code>,
    feedbacks: Vec<Feedback>,
}

impl Universe {
    /// Enumerate the universe for a code length
    ///
    /// # Errors
    /// Returns `ConfigError` if `code_length` is 0 or above `MAX_CODE_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::Universe;
    ///
    /// let universe = Universe::new(3).unwrap();
    /// assert_eq!(universe.len(), 512);
    /// assert_eq!(universe.codes()[0].to_string(), "T0-T0-T0");
    /// assert_eq!(universe.codes()[1].to_string(), "T0-T0-T1");
    ///
    /// assert!(Universe::new(0).is_err());
    /// ```
    pub fn new(code_length: usize) -> Result<Self, ConfigError> {
        validate_code_length(code_length)?;

        let size = BUTTON_COUNT.pow(code_length as u32);
        let codes = (0..size)
            .map(|index| Code::from_canonical_index(index, code_length))
            .collect();

        Ok(Self {
            code_length,
            codes,
            feedbacks: Feedback::all(code_length),
        })
    }

    /// Length of every code in the universe
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// All codes in canonical order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Feasible feedback values for this length
    #[inline]
    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Number of codes (`8^length`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; a valid universe has at least eight codes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First code in canonical order (`T0-T0-...`)
    #[inline]
    #[must_use]
    pub fn first(&self) -> Code {
        self.codes[0]
    }

    /// Canonical position of a code, or `None` for a code of another length
    #[must_use]
    pub fn index_of(&self, code: &Code) -> Option<usize> {
        (code.len() == self.code_length).then(|| {
            code.buttons()
                .iter()
                .fold(0, |acc, button| acc * BUTTON_COUNT + button.index())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_grow_as_powers_of_eight() {
        for length in 1..=4 {
            let universe = Universe::new(length).unwrap();
            assert_eq!(universe.len(), 8usize.pow(length as u32));
            assert_eq!(universe.code_length(), length);
            assert!(!universe.is_empty());
        }
    }

    #[test]
    fn invalid_lengths_are_refused() {
        assert_eq!(Universe::new(0).unwrap_err(), ConfigError::ZeroCodeLength);
        assert_eq!(
            Universe::new(MAX_CODE_LENGTH + 1).unwrap_err(),
            ConfigError::CodeLengthTooLarge(MAX_CODE_LENGTH + 1)
        );
    }

    #[test]
    fn enumeration_is_lexicographic() {
        let universe = Universe::new(2).unwrap();
        assert_eq!(universe.first(), Code::from_indices(&[0, 0]).unwrap());
        assert_eq!(universe.codes()[7], Code::from_indices(&[0, 7]).unwrap());
        assert_eq!(universe.codes()[8], Code::from_indices(&[1, 0]).unwrap());
        assert_eq!(universe.codes()[63], Code::from_indices(&[7, 7]).unwrap());
    }

    #[test]
    fn codes_are_distinct_and_indexable() {
        let universe = Universe::new(3).unwrap();
        for (i, code) in universe.codes().iter().enumerate() {
            assert_eq!(universe.index_of(code), Some(i));
        }
        let other = Code::from_indices(&[0, 0]).unwrap();
        assert_eq!(universe.index_of(&other), None);
    }

    #[test]
    fn feedbacks_match_length() {
        let universe = Universe::new(4).unwrap();
        assert_eq!(universe.feedbacks(), Feedback::all(4).as_slice());
    }
}
