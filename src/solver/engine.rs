//! Stateful game engine shared by the filtering strategies
//!
//! `GameState` owns the consistent-candidate set and the robot's position for
//! one strategy instance. `CriterionStrategy` plugs a scoring criterion into
//! the shared selection skeleton; `SimpleStrategy` guesses straight from the
//! consistent set.

use super::criterion::Criterion;
use super::filter::retain_consistent;
use super::selection::{best_guesses, choose, prefer_consistent, shortest_code};
use super::strategy::Strategy;
use crate::core::{Button, Code, Feedback, Universe};
use std::fmt;
use tracing::{debug, warn};

/// Error type for a guess that cannot be made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// `guess` was called before `reset`
    NotStarted,
    /// The feedback cannot occur for this code length
    FeedbackOutOfRange { feedback: Feedback, code_length: usize },
    /// Filtering removed every code; the feedback did not come from a fixed secret
    NoConsistentCodes,
    /// The game is over; a new one has to be started first
    AlreadySolved,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "No guess has been played yet; call reset first"),
            Self::FeedbackOutOfRange {
                feedback,
                code_length,
            } => write!(
                f,
                "Feedback {feedback} is impossible for codes of length {code_length}"
            ),
            Self::NoConsistentCodes => write!(
                f,
                "No consistent codes remain; the feedback contradicts every possible secret"
            ),
            Self::AlreadySolved => write!(f, "The code is already solved; start a new game"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// Per-game state of a filtering strategy
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    universe: &'a Universe,
    consistent: Vec<Code>,
    last_guess: Option<Code>,
    last_button: Option<Button>,
}

impl<'a> GameState<'a> {
    /// Fresh state: nothing played, no consistent set yet
    #[must_use]
    pub const fn new(universe: &'a Universe) -> Self {
        Self {
            universe,
            consistent: Vec::new(),
            last_guess: None,
            last_button: None,
        }
    }

    /// Refill the consistent set and play the opening guess
    ///
    /// The opening is the canonical first code, or with `tie_break` and a known
    /// robot position, the code closest to where the robot stands.
    pub fn start(&mut self, tie_break: bool) -> Code {
        self.consistent.clear();
        self.consistent.extend_from_slice(self.universe.codes());

        let opening = match self.last_button {
            Some(button) if tie_break => shortest_code(self.universe.codes(), Some(button))
                .unwrap_or_else(|| self.universe.first()),
            _ => self.universe.first(),
        };

        self.play(opening)
    }

    /// Record `code` as played and return it
    pub fn play(&mut self, code: Code) -> Code {
        self.last_guess = Some(code);
        self.last_button = Some(code.last());
        code
    }

    /// Filter the consistent set with the feedback for the last guess
    ///
    /// Returns the size of the set before filtering.
    ///
    /// # Errors
    /// Returns `StrategyError` if nothing was played yet, the feedback is
    /// infeasible, or no code survives.
    pub fn narrow(&mut self, feedback: Feedback) -> Result<usize, StrategyError> {
        let code_length = self.universe.code_length();
        if !feedback.is_feasible(code_length) {
            return Err(StrategyError::FeedbackOutOfRange {
                feedback,
                code_length,
            });
        }
        let guess = self.last_guess.ok_or(StrategyError::NotStarted)?;

        let before = self.consistent.len();
        let removed = retain_consistent(&mut self.consistent, &guess, feedback);
        debug!(%guess, %feedback, before, removed, "narrowed consistent set");

        if self.consistent.is_empty() {
            warn!(%guess, %feedback, "feedback left no consistent codes");
            return Err(StrategyError::NoConsistentCodes);
        }
        Ok(before)
    }

    /// The shared universe
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> &'a Universe {
        self.universe
    }

    /// Codes still possible in the current game
    #[inline]
    #[must_use]
    pub fn consistent(&self) -> &[Code] {
        &self.consistent
    }

    /// Last code played
    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<Code> {
        self.last_guess
    }

    /// Button the robot stands at, if any code was played
    #[inline]
    #[must_use]
    pub const fn last_button(&self) -> Option<Button> {
        self.last_button
    }
}

/// Strategy choosing each guess by a scoring criterion
///
/// A perfect-match feedback passed to `guess` starts a new game, exactly like
/// calling `reset`.
#[derive(Debug, Clone)]
pub struct CriterionStrategy<'a, C: Criterion> {
    criterion: C,
    state: GameState<'a>,
    tie_break: bool,
}

impl<'a, C: Criterion> CriterionStrategy<'a, C> {
    /// Create a strategy over a shared universe
    #[must_use]
    pub const fn new(criterion: C, universe: &'a Universe, tie_break: bool) -> Self {
        Self {
            criterion,
            state: GameState::new(universe),
            tie_break,
        }
    }

    /// Current game state
    #[must_use]
    pub const fn state(&self) -> &GameState<'a> {
        &self.state
    }

    fn select(&self, before: usize) -> Option<Code> {
        let consistent = self.state.consistent();
        let from = self.state.last_button();

        if let [only] = consistent {
            return Some(*only);
        }

        if self.criterion.reselect_on_stall() && consistent.len() == before {
            debug!(criterion = C::NAME, size = before, "no codes removed, reselecting by distance");
            return choose(consistent, from, self.tie_break);
        }

        let universe = self.state.universe();
        let best = best_guesses(&self.criterion, universe.codes(), consistent, universe.feedbacks());
        debug!(
            criterion = C::NAME,
            consistent = consistent.len(),
            ties = best.codes.len(),
            score = ?best.score,
            "scored guesses"
        );

        let candidates = prefer_consistent(best.codes, consistent);
        choose(&candidates, from, self.tie_break)
    }
}

impl<C: Criterion> Strategy for CriterionStrategy<'_, C> {
    fn reset(&mut self) -> Code {
        self.state.start(self.tie_break)
    }

    fn guess(&mut self, feedback: Feedback) -> Result<Code, StrategyError> {
        if feedback.is_perfect(self.state.universe().code_length()) {
            return Ok(self.reset());
        }

        let before = self.state.narrow(feedback)?;
        let code = self.select(before).ok_or(StrategyError::NoConsistentCodes)?;
        Ok(self.state.play(code))
    }

    fn consistent_count(&self) -> Option<usize> {
        Some(self.state.consistent().len())
    }

    fn robot_position(&self) -> Option<Button> {
        self.state.last_button()
    }

    fn name(&self) -> &'static str {
        C::NAME
    }
}

/// Strategy guessing a consistent code directly, without scoring
///
/// With `tie_break` it plays the consistent code closest to the robot,
/// otherwise the first consistent code in enumeration order.
#[derive(Debug, Clone)]
pub struct SimpleStrategy<'a> {
    state: GameState<'a>,
    tie_break: bool,
}

impl<'a> SimpleStrategy<'a> {
    #[must_use]
    pub const fn new(universe: &'a Universe, tie_break: bool) -> Self {
        Self {
            state: GameState::new(universe),
            tie_break,
        }
    }
}

impl Strategy for SimpleStrategy<'_> {
    fn reset(&mut self) -> Code {
        self.state.start(self.tie_break)
    }

    fn guess(&mut self, feedback: Feedback) -> Result<Code, StrategyError> {
        if feedback.is_perfect(self.state.universe().code_length()) {
            return Ok(self.reset());
        }

        self.state.narrow(feedback)?;
        let code = choose(self.state.consistent(), self.state.last_button(), self.tie_break)
            .ok_or(StrategyError::NoConsistentCodes)?;
        Ok(self.state.play(code))
    }

    fn consistent_count(&self) -> Option<usize> {
        Some(self.state.consistent().len())
    }

    fn robot_position(&self) -> Option<Button> {
        self.state.last_button()
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
