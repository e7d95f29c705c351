//! Game session shared by the interactive front ends
//!
//! The user holds the secret and answers each suggested code with feedback.
//! Every answered turn stores a snapshot of the strategy so it can be undone.

use crate::core::{Button, Code, Feedback, travel_distance};
use crate::solver::{Strategy, StrategyError};
use std::collections::BTreeMap;

/// One answered turn
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub consistent_before: Option<usize>,
    pub consistent_after: Option<usize>,
    /// Travel distance to enter the guess
    pub distance: f64,
}

/// What happened after submitting feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The strategy suggests this code next
    Next(Code),
    /// The suggested code was the secret
    Solved { guesses: usize },
}

/// State snapshot for undo functionality
#[derive(Debug, Clone)]
struct Snapshot<S> {
    strategy: S,
    guess: Code,
    robot: Option<Button>,
}

/// Session statistics over all games played
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub games_won: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
}

/// An interactive game against a secret only the user knows
#[derive(Debug, Clone)]
pub struct PlaySession<S> {
    strategy: S,
    current: Code,
    robot: Option<Button>,
    history: Vec<HistoryEntry>,
    undo_stack: Vec<Snapshot<S>>,
    solved: bool,
    stats: SessionStats,
}

impl<S: Strategy + Clone> PlaySession<S> {
    /// Start the first game
    pub fn new(mut strategy: S) -> Self {
        let current = strategy.reset();
        Self {
            strategy,
            current,
            robot: None,
            history: Vec::new(),
            undo_stack: Vec::new(),
            solved: false,
            stats: SessionStats::default(),
        }
    }

    /// Code the robot should enter next
    #[must_use]
    pub const fn current_guess(&self) -> Code {
        self.current
    }

    /// Button the robot stands at, `None` for the center
    #[must_use]
    pub const fn robot(&self) -> Option<Button> {
        self.robot
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Turn number of the current guess
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + usize::from(!self.solved)
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn consistent_count(&self) -> Option<usize> {
        self.strategy.consistent_count()
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Answer the current guess
    ///
    /// On error the session is left exactly as before the call.
    ///
    /// # Errors
    /// Returns `StrategyError` if the game is already solved, the feedback is
    /// impossible for this code length, or it contradicts every earlier answer.
    pub fn submit(&mut self, feedback: Feedback) -> Result<Outcome, StrategyError> {
        let code_length = self.current.len();
        if self.solved {
            return Err(StrategyError::AlreadySolved);
        }
        if !feedback.is_feasible(code_length) {
            return Err(StrategyError::FeedbackOutOfRange {
                feedback,
                code_length,
            });
        }

        let consistent_before = self.strategy.consistent_count();
        let distance = travel_distance(self.robot, &self.current);

        if feedback.is_perfect(code_length) {
            self.history.push(HistoryEntry {
                guess: self.current,
                feedback,
                consistent_before,
                consistent_after: consistent_before.map(|_| 1),
                distance,
            });
            self.robot = Some(self.current.last());
            self.solved = true;

            let guesses = self.history.len();
            self.stats.games_won += 1;
            *self.stats.guess_distribution.entry(guesses).or_insert(0) += 1;
            return Ok(Outcome::Solved { guesses });
        }

        let snapshot = Snapshot {
            strategy: self.strategy.clone(),
            guess: self.current,
            robot: self.robot,
        };
        let next = match self.strategy.guess(feedback) {
            Ok(next) => next,
            Err(err) => {
                self.strategy = snapshot.strategy;
                return Err(err);
            }
        };

        self.history.push(HistoryEntry {
            guess: self.current,
            feedback,
            consistent_before,
            consistent_after: self.strategy.consistent_count(),
            distance,
        });
        self.undo_stack.push(snapshot);
        self.robot = Some(self.current.last());
        self.current = next;
        Ok(Outcome::Next(next))
    }

    /// Take back the last answered turn of an unsolved game
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.solved {
            return false;
        }
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.strategy = snapshot.strategy;
        self.current = snapshot.guess;
        self.robot = snapshot.robot;
        self.history.pop();
        true
    }

    /// Start a new game; the robot stays where it is
    pub fn new_game(&mut self) {
        self.current = self.strategy.reset();
        self.history.clear();
        self.undo_stack.clear();
        self.solved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Universe;
    use crate::solver::{StrategyConfig, StrategyKind, StrategyType};

    fn session(universe: &Universe, kind: StrategyKind) -> PlaySession<StrategyType<'_>> {
        let config = StrategyConfig::new(universe.code_length(), kind).unwrap();
        PlaySession::new(StrategyType::build(&config, universe).unwrap())
    }

    fn answer(session: &mut PlaySession<StrategyType<'_>>, secret: &Code) -> Outcome {
        let feedback = Feedback::calculate(&session.current_guess(), secret);
        session.submit(feedback).unwrap()
    }

    #[test]
    fn plays_to_a_win() {
        let universe = Universe::new(3).unwrap();
        let mut session = session(&universe, StrategyKind::Entropy);
        let secret: Code = "2,6,1".parse().unwrap();

        let guesses = loop {
            if let Outcome::Solved { guesses } = answer(&mut session, &secret) {
                break guesses;
            }
            assert!(session.history().len() < 20);
        };

        assert!(session.is_solved());
        assert_eq!(session.history().len(), guesses);
        assert_eq!(session.history().last().unwrap().guess, secret);
        assert_eq!(session.stats().games_won, 1);
        assert_eq!(session.robot(), Some(secret.last()));
    }

    #[test]
    fn undo_restores_strategy_and_robot() {
        let universe = Universe::new(2).unwrap();
        let mut session = session(&universe, StrategyKind::Minimax);
        let opening = session.current_guess();

        assert!(!session.undo());
        session.submit(Feedback::new(0, 0)).unwrap();
        let narrowed = session.consistent_count();
        assert_eq!(session.robot(), Some(opening.last()));

        assert!(session.undo());
        assert_eq!(session.current_guess(), opening);
        assert_eq!(session.robot(), None);
        assert_eq!(session.consistent_count(), Some(64));
        assert!(session.history().is_empty());

        session.submit(Feedback::new(0, 0)).unwrap();
        assert_eq!(session.consistent_count(), narrowed);
    }

    #[test]
    fn contradiction_leaves_session_untouched() {
        let universe = Universe::new(2).unwrap();
        let mut session = session(&universe, StrategyKind::Simple);
        let opening = session.current_guess();

        // T0-T0 cannot score two misplaced buttons
        assert_eq!(
            session.submit(Feedback::new(0, 2)),
            Err(StrategyError::NoConsistentCodes)
        );
        assert_eq!(session.current_guess(), opening);
        assert_eq!(session.consistent_count(), Some(64));
        assert!(session.history().is_empty());

        assert!(matches!(
            session.submit(Feedback::new(3, 0)),
            Err(StrategyError::FeedbackOutOfRange { .. })
        ));
    }

    #[test]
    fn new_game_starts_where_the_robot_stands() {
        let universe = Universe::new(2).unwrap();
        let mut session = session(&universe, StrategyKind::Simple);
        let secret: Code = "5,3".parse().unwrap();

        while !matches!(answer(&mut session, &secret), Outcome::Solved { .. }) {}
        assert!(!session.undo());
        assert_eq!(
            session.submit(Feedback::new(0, 0)),
            Err(StrategyError::AlreadySolved)
        );

        session.new_game();
        assert!(!session.is_solved());
        assert_eq!(session.turn(), 1);
        assert_eq!(session.current_guess().first(), Button::T3);
        assert_eq!(session.consistent_count(), Some(64));
    }
}
