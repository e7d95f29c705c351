//! Guessing strategies
//!
//! Defines the Strategy trait, the configuration used to build a strategy, and
//! the enum wrapper holding every concrete strategy.

use super::criterion::{Entropy, ExpectedSize, Minimax, MostParts};
use super::engine::{CriterionStrategy, SimpleStrategy, StrategyError};
use crate::core::{Button, Code, ConfigError, Feedback, Universe};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// A code-breaking strategy driven by the outer game loop
pub trait Strategy {
    /// Start a new game and return the first guess
    fn reset(&mut self) -> Code;

    /// Consume the feedback for the previous guess and return the next guess
    ///
    /// # Errors
    /// Returns `StrategyError` if the feedback is impossible or contradicts
    /// every code still considered.
    fn guess(&mut self, feedback: Feedback) -> Result<Code, StrategyError>;

    /// Size of the consistent-candidate set, for strategies that keep one
    fn consistent_count(&self) -> Option<usize> {
        None
    }

    /// Button the robot last pressed, for strategies that plan routes from it
    fn robot_position(&self) -> Option<Button> {
        None
    }

    /// Short name for output
    fn name(&self) -> &'static str;
}

/// Available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Worst-case criterion (largest smallest part)
    Minimax,
    /// Maximum feedback entropy
    Entropy,
    /// Minimum expected remaining size
    ExpectedSize,
    /// Most distinct parts
    MostParts,
    /// Any consistent code, no scoring
    Simple,
    /// Always the same code
    Dummy,
    /// Uniformly random code each turn
    Random,
}

impl StrategyKind {
    /// Every strategy kind
    pub const ALL: [Self; 7] = [
        Self::Minimax,
        Self::Entropy,
        Self::ExpectedSize,
        Self::MostParts,
        Self::Simple,
        Self::Dummy,
        Self::Random,
    ];

    /// Canonical name, accepted by `from_str`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimax => "minimax",
            Self::Entropy => "entropy",
            Self::ExpectedSize => "expected-size",
            Self::MostParts => "most-parts",
            Self::Simple => "simple",
            Self::Dummy => "dummy",
            Self::Random => "random",
        }
    }

    /// Whether the strategy narrows a consistent set from feedback
    #[must_use]
    pub const fn uses_feedback(self) -> bool {
        !matches!(self, Self::Dummy | Self::Random)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    /// Names are case-insensitive; `knuth` and `worst-case` mean minimax
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "minimax" | "knuth" | "worst-case" => Ok(Self::Minimax),
            "entropy" => Ok(Self::Entropy),
            "expected-size" | "expected" => Ok(Self::ExpectedSize),
            "most-parts" | "parts" => Ok(Self::MostParts),
            "simple" => Ok(Self::Simple),
            "dummy" => Ok(Self::Dummy),
            "random" => Ok(Self::Random),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Construction parameters for a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Buttons per code
    pub code_length: usize,
    /// Which strategy to build
    pub kind: StrategyKind,
    /// Break ties by robot travel distance
    pub tie_break: bool,
    /// Seed for the random strategy; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl StrategyConfig {
    /// Validated configuration with tie-breaking on and no seed
    ///
    /// # Errors
    /// Returns `ConfigError` if `code_length` is 0 or above `MAX_CODE_LENGTH`.
    pub fn new(code_length: usize, kind: StrategyKind) -> Result<Self, ConfigError> {
        crate::core::validate_code_length(code_length)?;
        Ok(Self {
            code_length,
            kind,
            tie_break: true,
            seed: None,
        })
    }

    /// Turn travel-distance tie-breaking on or off
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: bool) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Fix the seed of the random strategy
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType<'a> {
    Minimax(CriterionStrategy<'a, Minimax>),
    Entropy(CriterionStrategy<'a, Entropy>),
    ExpectedSize(CriterionStrategy<'a, ExpectedSize>),
    MostParts(CriterionStrategy<'a, MostParts>),
    Simple(SimpleStrategy<'a>),
    Dummy(DummyStrategy),
    Random(RandomStrategy<'a>),
}

impl<'a> StrategyType<'a> {
    /// Build the configured strategy over a shared universe
    ///
    /// # Errors
    /// Returns `ConfigError::LengthMismatch` if the universe was built for
    /// another code length.
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::core::{Feedback, Universe};
    /// use robot_mastermind::solver::{Strategy, StrategyConfig, StrategyKind, StrategyType};
    ///
    /// let universe = Universe::new(3).unwrap();
    /// let config = StrategyConfig::new(3, StrategyKind::Entropy).unwrap();
    /// let mut strategy = StrategyType::build(&config, &universe).unwrap();
    ///
    /// let first = strategy.reset();
    /// assert_eq!(first, universe.first());
    /// let second = strategy.guess(Feedback::new(0, 0)).unwrap();
    /// assert!(second.buttons().iter().all(|b| b.index() != 0));
    /// ```
    pub fn build(config: &StrategyConfig, universe: &'a Universe) -> Result<Self, ConfigError> {
        if universe.code_length() != config.code_length {
            return Err(ConfigError::LengthMismatch {
                expected: config.code_length,
                actual: universe.code_length(),
            });
        }

        let tie_break = config.tie_break;
        Ok(match config.kind {
            StrategyKind::Minimax => {
                Self::Minimax(CriterionStrategy::new(Minimax, universe, tie_break))
            }
            StrategyKind::Entropy => {
                Self::Entropy(CriterionStrategy::new(Entropy, universe, tie_break))
            }
            StrategyKind::ExpectedSize => {
                Self::ExpectedSize(CriterionStrategy::new(ExpectedSize, universe, tie_break))
            }
            StrategyKind::MostParts => {
                Self::MostParts(CriterionStrategy::new(MostParts, universe, tie_break))
            }
            StrategyKind::Simple => Self::Simple(SimpleStrategy::new(universe, tie_break)),
            StrategyKind::Dummy => Self::Dummy(DummyStrategy::new(config.code_length)?),
            StrategyKind::Random => Self::Random(RandomStrategy::new(universe, config.seed)),
        })
    }
}

impl Strategy for StrategyType<'_> {
    fn reset(&mut self) -> Code {
        match self {
            Self::Minimax(s) => s.reset(),
            Self::Entropy(s) => s.reset(),
            Self::ExpectedSize(s) => s.reset(),
            Self::MostParts(s) => s.reset(),
            Self::Simple(s) => s.reset(),
            Self::Dummy(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }

    fn guess(&mut self, feedback: Feedback) -> Result<Code, StrategyError> {
        match self {
            Self::Minimax(s) => s.guess(feedback),
            Self::Entropy(s) => s.guess(feedback),
            Self::ExpectedSize(s) => s.guess(feedback),
            Self::MostParts(s) => s.guess(feedback),
            Self::Simple(s) => s.guess(feedback),
            Self::Dummy(s) => s.guess(feedback),
            Self::Random(s) => s.guess(feedback),
        }
    }

    fn consistent_count(&self) -> Option<usize> {
        match self {
            Self::Minimax(s) => s.consistent_count(),
            Self::Entropy(s) => s.consistent_count(),
            Self::ExpectedSize(s) => s.consistent_count(),
            Self::MostParts(s) => s.consistent_count(),
            Self::Simple(s) => s.consistent_count(),
            Self::Dummy(s) => s.consistent_count(),
            Self::Random(s) => s.consistent_count(),
        }
    }

    fn robot_position(&self) -> Option<Button> {
        match self {
            Self::Minimax(s) => s.robot_position(),
            Self::Entropy(s) => s.robot_position(),
            Self::ExpectedSize(s) => s.robot_position(),
            Self::MostParts(s) => s.robot_position(),
            Self::Simple(s) => s.robot_position(),
            Self::Dummy(s) => s.robot_position(),
            Self::Random(s) => s.robot_position(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Minimax(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::ExpectedSize(s) => s.name(),
            Self::MostParts(s) => s.name(),
            Self::Simple(s) => s.name(),
            Self::Dummy(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }
}

/// Dummy strategy
///
/// Always plays the first `length` buttons in order, e.g. `T0-T1-T2`.
#[derive(Debug, Clone)]
pub struct DummyStrategy {
    code: Code,
}

impl DummyStrategy {
    /// # Errors
    /// Returns `ConfigError` if `code_length` is 0 or above `MAX_CODE_LENGTH`.
    pub fn new(code_length: usize) -> Result<Self, ConfigError> {
        crate::core::validate_code_length(code_length)?;
        let buttons: Vec<Button> = Button::ALL.iter().copied().take(code_length).collect();
        let code = Code::new(&buttons).map_err(|_| ConfigError::CodeLengthTooLarge(code_length))?;
        Ok(Self { code })
    }
}

impl Strategy for DummyStrategy {
    fn reset(&mut self) -> Code {
        self.code
    }

    fn guess(&mut self, _feedback: Feedback) -> Result<Code, StrategyError> {
        Ok(self.code)
    }

    fn name(&self) -> &'static str {
        "dummy"
    }
}

/// Random strategy
///
/// Draws a uniformly random code from the universe on every call, ignoring
/// feedback entirely.
#[derive(Debug, Clone)]
pub struct RandomStrategy<'a> {
    universe: &'a Universe,
    rng: StdRng,
}

impl<'a> RandomStrategy<'a> {
    #[must_use]
    pub fn new(universe: &'a Universe, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { universe, rng }
    }

    fn draw(&mut self) -> Code {
        let codes = self.universe.codes();
        codes[self.rng.random_range(0..codes.len())]
    }
}

impl Strategy for RandomStrategy<'_> {
    fn reset(&mut self) -> Code {
        self.draw()
    }

    fn guess(&mut self, _feedback: Feedback) -> Result<Code, StrategyError> {
        Ok(self.draw())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
