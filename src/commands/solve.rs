//! Code solving command
//!
//! Plays one game against a known secret and records every turn.

use crate::core::{Button, Code, Feedback, travel_distance};
use crate::solver::{Strategy, StrategyError};

/// Configuration for solving a code
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    pub secret: Code,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_guesses: 50,
        }
    }
}

/// Result of solving a code
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    /// Distance the robot covered over the whole game, starting at the center
    #[must_use]
    pub fn total_distance(&self) -> f64 {
        self.steps.iter().map(|step| step.distance).sum()
    }
}

/// A single turn of the game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub code: Code,
    pub feedback: Feedback,
    /// Consistent codes before this guess, for strategies that track them
    pub consistent_before: Option<usize>,
    pub consistent_after: Option<usize>,
    /// Travel distance to enter this guess
    pub distance: f64,
}

/// Play `strategy` against the configured secret
///
/// The strategy is reset first, so an instance can be reused across secrets.
/// Travel is measured from where the strategy left the robot, or from the
/// center for strategies that do not track it.
/// A strategy that keeps a consistent set reports its size before and after
/// every turn; a solved turn leaves exactly one consistent code.
///
/// # Errors
/// Returns `StrategyError` if the strategy cannot produce a guess.
///
/// # Examples
/// ```
/// use robot_mastermind::commands::{SolveConfig, solve_code};
/// use robot_mastermind::core::Universe;
/// use robot_mastermind::solver::{Minimax, CriterionStrategy};
///
/// let universe = Universe::new(3).unwrap();
/// let mut strategy = CriterionStrategy::new(Minimax, &universe, true);
/// let secret = "5,2,2".parse().unwrap();
///
/// let result = solve_code(&SolveConfig::new(secret), &mut strategy).unwrap();
/// assert!(result.success);
/// assert_eq!(result.steps.last().unwrap().code, secret);
/// ```
pub fn solve_code<S: Strategy>(
    config: &SolveConfig,
    strategy: &mut S,
) -> Result<SolveResult, StrategyError> {
    let secret = config.secret;
    let mut steps: Vec<GuessStep> = Vec::new();
    let mut last_button: Option<Button> = strategy.robot_position();
    let mut guess = strategy.reset();

    while steps.len() < config.max_guesses {
        let consistent_before = strategy.consistent_count();
        let feedback = Feedback::calculate(&guess, &secret);
        let distance = travel_distance(last_button, &guess);
        last_button = Some(guess.last());

        if feedback.is_perfect(secret.len()) {
            steps.push(GuessStep {
                code: guess,
                feedback,
                consistent_before,
                consistent_after: consistent_before.map(|_| 1),
                distance,
            });
            return Ok(SolveResult {
                success: true,
                secret,
                steps,
            });
        }

        let next = strategy.guess(feedback)?;
        steps.push(GuessStep {
            code: guess,
            feedback,
            consistent_before,
            consistent_after: strategy.consistent_count(),
            distance,
        });
        guess = next;
    }

    Ok(SolveResult {
        success: false,
        secret,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;
    use crate::solver::{
        CriterionStrategy, DummyStrategy, Entropy, SimpleStrategy, StrategyConfig, StrategyKind,
        StrategyType,
    };

    #[test]
    fn solve_records_shrinking_consistent_sets() {
        let universe = Universe::new(3).unwrap();
        let mut strategy = CriterionStrategy::new(Entropy, &universe, true);
        let secret: Code = "3,3,7".parse().unwrap();

        let result = solve_code(&SolveConfig::new(secret), &mut strategy).unwrap();

        assert!(result.success);
        assert_eq!(result.steps[0].consistent_before, Some(universe.len()));
        for step in &result.steps {
            assert!(step.consistent_after.unwrap() <= step.consistent_before.unwrap());
        }
        assert_eq!(result.steps.last().unwrap().consistent_after, Some(1));
    }

    #[test]
    fn first_step_starts_from_the_center() {
        let universe = Universe::new(2).unwrap();
        let mut strategy = SimpleStrategy::new(&universe, true);
        let secret: Code = "0,0".parse().unwrap();

        let result = solve_code(&SolveConfig::new(secret), &mut strategy).unwrap();

        // T0-T0 is the opening and the secret
        assert_eq!(result.steps.len(), 1);
        assert!((result.total_distance() - 1084.4).abs() < 1e-9);
    }

    #[test]
    fn distances_follow_the_robot() {
        let universe = Universe::new(2).unwrap();
        let mut strategy = SimpleStrategy::new(&universe, false);
        let secret: Code = "1,2".parse().unwrap();

        let result = solve_code(&SolveConfig::new(secret), &mut strategy).unwrap();
        let mut last = None;
        for step in &result.steps {
            assert!((step.distance - travel_distance(last, &step.code)).abs() < 1e-9);
            last = Some(step.code.last());
        }
    }

    #[test]
    fn guess_limit_is_respected() {
        let mut strategy = DummyStrategy::new(3).unwrap();
        let mut config = SolveConfig::new("7,7,7".parse().unwrap());
        config.max_guesses = 4;

        let result = solve_code(&config, &mut strategy).unwrap();

        assert!(!result.success);
        assert_eq!(result.steps.len(), 4);
        assert!(result.steps.iter().all(|s| s.consistent_before.is_none()));
    }

    #[test]
    fn strategy_is_reusable_across_secrets() {
        let universe = Universe::new(2).unwrap();
        let config = StrategyConfig::new(2, StrategyKind::MostParts).unwrap();
        let mut strategy = StrategyType::build(&config, &universe).unwrap();

        for secret in ["0,1", "6,6", "7,2"] {
            let secret: Code = secret.parse().unwrap();
            let result = solve_code(&SolveConfig::new(secret), &mut strategy).unwrap();
            assert!(result.success, "failed on {secret}");
        }
    }

    #[test]
    fn reused_strategy_measures_from_the_previous_finish() {
        let universe = Universe::new(2).unwrap();
        let mut strategy = SimpleStrategy::new(&universe, true);

        let first = solve_code(&SolveConfig::new("7,7".parse().unwrap()), &mut strategy).unwrap();
        assert_eq!(first.steps.last().unwrap().code.last(), Button::T7);

        let second = solve_code(&SolveConfig::new("0,1".parse().unwrap()), &mut strategy).unwrap();
        let opening = second.steps[0].code;

        // The opening is chosen next to T7, and its cost is measured from there
        assert_eq!(opening, "7,7".parse::<Code>().unwrap());
        assert!((second.steps[0].distance - travel_distance(Some(Button::T7), &opening)).abs() < 1e-9);
    }
}
