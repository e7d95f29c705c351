//! Simulate command
//!
//! Runs several timed sessions of one strategy and aggregates them.

use crate::core::Universe;
use crate::output::formatters::progress_bar;
use crate::simulation::{Simulation, SimulationConfig, SimulationReport, Statistics};
use crate::solver::{Strategy, StrategyConfig, StrategyType};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a batch of simulations
#[derive(Debug, Clone, Copy)]
pub struct SimulateConfig {
    pub simulations: usize,
    pub simulation: SimulationConfig,
    pub strategy: StrategyConfig,
    /// Run sessions on the rayon pool, one strategy instance each
    pub parallel: bool,
    pub show_progress: bool,
}

/// Result of a batch of simulations
#[derive(Debug, Clone)]
pub struct SimulateResult {
    pub strategy: &'static str,
    pub config: SimulateConfig,
    pub sessions: Vec<Statistics>,
    pub report: SimulationReport,
    pub duration: Duration,
}

/// Run `config.simulations` independent sessions
///
/// With a seed, session `i` uses `seed + i` for its secrets (and for the random
/// strategy), so sequential and parallel runs give the same sessions.
///
/// # Errors
/// Returns an error if the configuration is invalid or a strategy fails.
pub fn run_simulations(config: &SimulateConfig, universe: &Universe) -> Result<SimulateResult> {
    config
        .simulation
        .validate()
        .context("Invalid simulation parameters")?;
    let strategy_name = StrategyType::build(&config.strategy, universe)?.name();

    let start = Instant::now();
    let bar = progress_bar(config.simulations as u64, config.show_progress);
    bar.set_message(strategy_name);

    let run_one = |index: usize| -> Result<Statistics> {
        let seed = config.simulation.seed.map(|s| s.wrapping_add(index as u64));
        let strategy_config = config.strategy.with_seed(seed);
        let session_config = SimulationConfig {
            seed,
            ..config.simulation
        };

        let strategy = StrategyType::build(&strategy_config, universe)?;
        let stats = Simulation::new(session_config, strategy)?
            .run()
            .with_context(|| format!("Simulation {} failed", index + 1))?;
        bar.inc(1);
        Ok(stats)
    };

    let sessions = if config.parallel {
        (0..config.simulations)
            .into_par_iter()
            .map(run_one)
            .collect::<Result<Vec<_>>>()?
    } else {
        (0..config.simulations)
            .map(run_one)
            .collect::<Result<Vec<_>>>()?
    };
    bar.finish_with_message("Complete!");

    let report = SimulationReport::aggregate(&sessions);
    let duration = start.elapsed();
    info!(
        strategy = strategy_name,
        simulations = config.simulations,
        successes = report.total_successes,
        elapsed_secs = duration.as_secs_f64(),
        "simulations finished"
    );

    Ok(SimulateResult {
        strategy: strategy_name,
        config: *config,
        sessions,
        report,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyKind;

    fn config(kind: StrategyKind, parallel: bool) -> SimulateConfig {
        SimulateConfig {
            simulations: 3,
            simulation: SimulationConfig {
                time_limit_secs: 200,
                code_length: 2,
                seed: Some(11),
                ..SimulationConfig::default()
            },
            strategy: StrategyConfig::new(2, kind).unwrap(),
            parallel,
            show_progress: false,
        }
    }

    #[test]
    fn simulations_run_and_aggregate() {
        let universe = Universe::new(2).unwrap();
        let result = run_simulations(&config(StrategyKind::Entropy, false), &universe).unwrap();

        assert_eq!(result.strategy, "entropy");
        assert_eq!(result.sessions.len(), 3);
        assert_eq!(result.report.simulations, 3);
        assert!(result.report.total_successes > 0);
        assert!(result.report.expected_guesses.unwrap() >= 1.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let universe = Universe::new(2).unwrap();
        let sequential = run_simulations(&config(StrategyKind::Simple, false), &universe).unwrap();
        let parallel = run_simulations(&config(StrategyKind::Simple, true), &universe).unwrap();

        assert_eq!(sequential.sessions, parallel.sessions);
        assert_eq!(sequential.report, parallel.report);
    }

    #[test]
    fn invalid_parameters_fail_early() {
        let universe = Universe::new(2).unwrap();
        let mut bad = config(StrategyKind::Minimax, false);
        bad.simulation.robot_speed = -5.0;
        assert!(run_simulations(&bad, &universe).is_err());
    }
}
