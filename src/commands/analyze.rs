//! Code analysis command
//!
//! Scores one code as an opening guess under every criterion.

use crate::core::{Code, ConfigError, Universe, travel_distance};
use crate::solver::{Criterion, Entropy, ExpectedSize, Minimax, MostParts, Partition};

/// Result of analyzing a code
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    /// Feedback entropy in bits
    pub entropy: f64,
    /// Expected number of codes left after the feedback
    pub expected_size: f64,
    /// Smallest non-empty part, or 0 if the code splits nothing
    pub minimax: usize,
    /// Distinct parts as counted by the most-parts criterion
    pub most_parts: usize,
    pub non_empty_parts: usize,
    pub largest_part: usize,
    /// Travel distance to enter the code from the center
    pub distance_from_center: f64,
}

/// Analyze `code` as a first guess against the whole universe
///
/// # Errors
/// Returns `ConfigError::LengthMismatch` if the code length differs from the
/// universe's.
///
/// # Examples
/// ```
/// use robot_mastermind::commands::analyze_code;
/// use robot_mastermind::core::Universe;
///
/// let universe = Universe::new(2).unwrap();
/// let result = analyze_code(&"0,1".parse().unwrap(), &universe).unwrap();
/// assert_eq!(result.total_candidates, 64);
/// assert!(result.entropy > 0.0);
/// ```
pub fn analyze_code(code: &Code, universe: &Universe) -> Result<AnalysisResult, ConfigError> {
    if code.len() != universe.code_length() {
        return Err(ConfigError::LengthMismatch {
            expected: code.len(),
            actual: universe.code_length(),
        });
    }

    let partition = Partition::compute(code, universe.codes(), universe.feedbacks());

    Ok(AnalysisResult {
        code: *code,
        total_candidates: partition.total(),
        entropy: Entropy.score(&partition),
        expected_size: ExpectedSize.score(&partition),
        minimax: Minimax.score(&partition),
        most_parts: MostParts.score(&partition),
        non_empty_parts: partition.non_empty().count(),
        largest_part: partition.non_empty().map(|p| p.size).max().unwrap_or(0),
        distance_from_center: travel_distance(None, code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_code() {
        let universe = Universe::new(3).unwrap();
        let result = analyze_code(&"0,1,2".parse().unwrap(), &universe).unwrap();

        assert_eq!(result.total_candidates, 512);
        assert!(result.entropy > 0.0);
        assert!(result.entropy <= (512_f64).log2());
        assert!(result.expected_size >= 1.0);
        assert!(result.expected_size <= 512.0);
        assert!(result.minimax >= 1);
        assert!(result.minimax <= result.largest_part);
        assert!(result.most_parts <= result.non_empty_parts);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let universe = Universe::new(3).unwrap();
        let result = analyze_code(&"0,1".parse().unwrap(), &universe);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::LengthMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn distinct_buttons_split_more_than_repeats() {
        let universe = Universe::new(3).unwrap();
        let repeated = analyze_code(&"0,0,0".parse().unwrap(), &universe).unwrap();
        let distinct = analyze_code(&"0,1,2".parse().unwrap(), &universe).unwrap();

        // T0-T0-T0 can only report exact matches
        assert_eq!(repeated.non_empty_parts, 4);
        assert!(distinct.non_empty_parts > repeated.non_empty_parts);
        assert!(distinct.entropy > repeated.entropy);
        assert!(distinct.expected_size < repeated.expected_size);
    }
}
