//! Per-session statistics and their aggregation across sessions

use std::collections::BTreeMap;

/// Columns of the round table: rounds 1 to 7, then everything from round 8 on
pub const ROUND_COLUMNS: usize = 8;

/// Outcome of one simulated session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    successes_per_round: BTreeMap<usize, usize>,
    thinking_time_ms: f64,
    driving_time_ms: f64,
    round: usize,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: 1,
            ..Self::default()
        }
    }

    /// Advance to the next round of the current game
    pub fn count(&mut self) {
        self.round += 1;
    }

    /// Record a cracked code in the current round and start over at round 1
    pub fn record_success(&mut self) {
        *self.successes_per_round.entry(self.round).or_insert(0) += 1;
        self.round = 1;
    }

    pub fn add_thinking_time(&mut self, ms: f64) {
        self.thinking_time_ms += ms;
    }

    pub fn add_driving_time(&mut self, ms: f64) {
        self.driving_time_ms += ms;
    }

    /// Cracked codes keyed by the round they were found in
    #[must_use]
    pub const fn successes_per_round(&self) -> &BTreeMap<usize, usize> {
        &self.successes_per_round
    }

    /// Round of the game still in progress
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn thinking_time_ms(&self) -> f64 {
        self.thinking_time_ms
    }

    #[must_use]
    pub const fn driving_time_ms(&self) -> f64 {
        self.driving_time_ms
    }

    /// Number of cracked codes
    #[must_use]
    pub fn successes(&self) -> usize {
        self.successes_per_round.values().sum()
    }

    /// Guesses spent on cracked codes
    #[must_use]
    pub fn guesses_in_successes(&self) -> usize {
        self.successes_per_round
            .iter()
            .map(|(round, successes)| round * successes)
            .sum()
    }
}

/// Averages over several sessions
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub simulations: usize,
    /// Total cracked codes over all sessions
    pub total_successes: usize,
    /// Mean cracked codes per session
    pub mean_successes: f64,
    /// Guesses per cracked code, `None` if nothing was cracked
    pub expected_guesses: Option<f64>,
    pub driving_percent: f64,
    pub thinking_percent: f64,
    /// Share of cracked codes per round column, `None` if nothing was cracked
    pub round_percentages: Option<[f64; ROUND_COLUMNS]>,
}

impl SimulationReport {
    /// Combine the statistics of several sessions
    ///
    /// # Examples
    /// ```
    /// use robot_mastermind::simulation::{SimulationReport, Statistics};
    ///
    /// let mut stats = Statistics::new();
    /// stats.count();
    /// stats.record_success(); // cracked in round 2
    /// stats.record_success(); // cracked in round 1
    /// stats.add_driving_time(300.0);
    /// stats.add_thinking_time(100.0);
    ///
    /// let report = SimulationReport::aggregate(&[stats]);
    /// assert_eq!(report.total_successes, 2);
    /// assert_eq!(report.expected_guesses, Some(1.5));
    /// assert_eq!(report.driving_percent, 75.0);
    /// ```
    #[must_use]
    pub fn aggregate(sessions: &[Statistics]) -> Self {
        let simulations = sessions.len();
        let total_successes: usize = sessions.iter().map(Statistics::successes).sum();
        let total_guesses: usize = sessions.iter().map(Statistics::guesses_in_successes).sum();

        let mean_successes = if simulations == 0 {
            0.0
        } else {
            total_successes as f64 / simulations as f64
        };
        let expected_guesses =
            (total_successes > 0).then(|| total_guesses as f64 / total_successes as f64);

        let thinking: f64 = sessions.iter().map(Statistics::thinking_time_ms).sum();
        let driving: f64 = sessions.iter().map(Statistics::driving_time_ms).sum();
        let total_time = thinking + driving;
        let (driving_percent, thinking_percent) = if total_time > 0.0 {
            (driving / total_time * 100.0, thinking / total_time * 100.0)
        } else {
            (0.0, 0.0)
        };

        let round_percentages = (total_successes > 0).then(|| {
            let mut columns = [0.0; ROUND_COLUMNS];
            for stats in sessions {
                for (&round, &successes) in stats.successes_per_round() {
                    let column = round.clamp(1, ROUND_COLUMNS) - 1;
                    columns[column] += successes as f64;
                }
            }
            columns.map(|count| count * 100.0 / total_successes as f64)
        });

        Self {
            simulations,
            total_successes,
            mean_successes,
            expected_guesses,
            driving_percent,
            thinking_percent,
            round_percentages,
        }
    }
}
