//! One timed session

use super::statistics::Statistics;
use crate::core::{Button, Code, ConfigError, Feedback, travel_distance, validate_code_length};
use crate::solver::{Strategy, StrategyError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info};

/// Parameters of a timed session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Time budget in seconds, shared by driving and thinking
    pub time_limit_secs: u64,
    /// Robot speed in mm/s
    pub robot_speed: f64,
    /// Multiplier on measured thinking time; 0 ignores computation entirely
    pub cpu_slowness: f64,
    pub code_length: usize,
    /// Hard stop for sessions that never use up their time
    pub max_guesses: usize,
    /// Seed for the secret codes; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 1000,
            robot_speed: 100.0,
            cpu_slowness: 0.0,
            code_length: 3,
            max_guesses: 100_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check the parameters before running
    ///
    /// # Errors
    /// Returns `ConfigError` for an unsupported code length, a speed that is not
    /// positive, or a negative slowness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_code_length(self.code_length)?;
        if !(self.robot_speed > 0.0 && self.robot_speed.is_finite()) {
            return Err(ConfigError::InvalidParameter(format!(
                "robot speed must be positive, got {}",
                self.robot_speed
            )));
        }
        if !(self.cpu_slowness >= 0.0 && self.cpu_slowness.is_finite()) {
            return Err(ConfigError::InvalidParameter(format!(
                "cpu slowness must not be negative, got {}",
                self.cpu_slowness
            )));
        }
        Ok(())
    }

    /// Time budget in milliseconds
    #[must_use]
    pub const fn time_limit_ms(&self) -> f64 {
        self.time_limit_secs as f64 * 1000.0
    }
}

/// Milliseconds the robot needs to enter `code` starting at `last`
///
/// # Examples
/// ```
/// use robot_mastermind::core::Button;
/// use robot_mastermind::simulation::driving_time_ms;
///
/// let code = "0".parse().unwrap();
/// assert_eq!(driving_time_ms(Some(Button::T0), &code, 100.0), 0.0);
/// assert!((driving_time_ms(None, &code, 100.0) - 10_844.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn driving_time_ms(last: Option<Button>, code: &Code, robot_speed: f64) -> f64 {
    travel_distance(last, code) / robot_speed * 1000.0
}

/// A timed session of one strategy against random secrets
pub struct Simulation<S: Strategy> {
    config: SimulationConfig,
    strategy: S,
    rng: StdRng,
}

impl<S: Strategy> Simulation<S> {
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SimulationConfig, strategy: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self {
            config,
            strategy,
            rng,
        })
    }

    /// Run until driving plus weighted thinking time reaches the limit
    ///
    /// Every cracked code is recorded with its round and replaced by a fresh
    /// random secret.
    ///
    /// # Errors
    /// Returns `StrategyError` if the strategy fails to produce a guess.
    pub fn run(&mut self) -> Result<Statistics, StrategyError> {
        let length = self.config.code_length;
        let speed = self.config.robot_speed;
        let limit = self.config.time_limit_ms();

        let mut statistics = Statistics::new();
        let mut secret = Code::random(&mut self.rng, length);
        let mut thinking = 0.0;

        let timer = Instant::now();
        let mut guess = self.strategy.reset();
        thinking += self.weighted_thinking(timer);
        let mut driving = driving_time_ms(None, &guess, speed);
        let mut last_button = Some(guess.last());
        let mut guesses = 1;

        while driving + thinking < limit && guesses < self.config.max_guesses {
            let feedback = Feedback::calculate(&guess, &secret);
            let timer = Instant::now();
            if feedback.is_perfect(length) {
                debug!(%secret, round = statistics.current_round(), "cracked");
                secret = Code::random(&mut self.rng, length);
                guess = self.strategy.reset();
                statistics.record_success();
            } else {
                guess = self.strategy.guess(feedback)?;
                statistics.count();
            }
            thinking += self.weighted_thinking(timer);

            driving += driving_time_ms(last_button, &guess, speed);
            last_button = Some(guess.last());
            guesses += 1;
        }

        statistics.add_driving_time(driving);
        statistics.add_thinking_time(thinking);
        info!(
            strategy = self.strategy.name(),
            successes = statistics.successes(),
            guesses,
            driving_ms = driving,
            thinking_ms = thinking,
            "simulation finished"
        );
        Ok(statistics)
    }

    /// The strategy being simulated
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    fn weighted_thinking(&self, timer: Instant) -> f64 {
        timer.elapsed().as_secs_f64() * 1000.0 * self.config.cpu_slowness
    }
}
