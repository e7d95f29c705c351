//! Test all codes - comprehensive strategy evaluation
//!
//! Runs the strategy against every secret of the universe and generates statistics.

use super::solve::{SolveConfig, solve_code};
use crate::core::{Code, Universe};
use crate::output::formatters::progress_bar;
use crate::solver::{Strategy, StrategyConfig, StrategyType};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub num_guesses: usize,
    pub success: bool,
    pub distance: f64,
}

/// Statistics from testing all secrets
#[derive(Debug, Clone)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub average_distance: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Solved secrets needing the most guesses, hardest first
    pub hardest: Vec<(Code, usize)>,
}

/// Run a fresh strategy against every secret (or the first `limit` of them)
///
/// Every secret gets its own strategy instance, so the robot always starts at
/// the center and results do not depend on the order of secrets.
///
/// # Errors
/// Returns an error if the strategy cannot be built or fails on a secret.
pub fn run_test_all(
    config: &StrategyConfig,
    universe: &Universe,
    limit: Option<usize>,
    max_guesses: usize,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let secrets = &universe.codes()[..limit.unwrap_or(universe.len()).min(universe.len())];
    let strategy_name = StrategyType::build(config, universe)?.name();

    let total_start = Instant::now();
    let bar = progress_bar(secrets.len() as u64, show_progress);

    let results = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| -> Result<CodeTestResult> {
            let seeded = config.with_seed(config.seed.map(|s| s.wrapping_add(index as u64)));
            let mut strategy = StrategyType::build(&seeded, universe)?;

            let mut solve_config = SolveConfig::new(*secret);
            solve_config.max_guesses = max_guesses;
            let result = solve_code(&solve_config, &mut strategy)
                .with_context(|| format!("Strategy failed on secret {secret}"))?;

            bar.inc(1);
            Ok(CodeTestResult {
                secret: *secret,
                num_guesses: result.steps.len(),
                success: result.success,
                distance: result.total_distance(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    bar.finish_with_message("Complete!");

    Ok(summarize(strategy_name, &results, total_start.elapsed()))
}

fn summarize(
    strategy: &'static str,
    results: &[CodeTestResult],
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();

    let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for result in &solved {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let (average_guesses, average_distance) = if solved.is_empty() {
        (0.0, 0.0)
    } else {
        let count = solved.len() as f64;
        (
            solved.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / count,
            solved.iter().map(|r| r.distance).sum::<f64>() / count,
        )
    };

    let mut hardest: Vec<(Code, usize)> =
        solved.iter().map(|r| (r.secret, r.num_guesses)).collect();
    // Stable sort keeps enumeration order among equal counts
    hardest.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
    hardest.truncate(10);

    TestAllStatistics {
        strategy,
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        guess_distribution,
        total_time,
        average_guesses,
        average_distance,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        hardest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyKind;

    #[test]
    fn every_secret_is_solved() {
        let universe = Universe::new(2).unwrap();
        let config = StrategyConfig::new(2, StrategyKind::Minimax).unwrap();
        let stats = run_test_all(&config, &universe, None, 20, false).unwrap();

        assert_eq!(stats.strategy, "minimax");
        assert_eq!(stats.total_codes, 64);
        assert_eq!(stats.solved, 64);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 64);
        assert!(stats.min_guesses >= 1);
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        // Only the opening itself is found in one guess
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn limit_takes_a_prefix() {
        let universe = Universe::new(2).unwrap();
        let config = StrategyConfig::new(2, StrategyKind::Entropy).unwrap();
        let stats = run_test_all(&config, &universe, Some(5), 20, false).unwrap();
        assert_eq!(stats.total_codes, 5);

        let oversized = run_test_all(&config, &universe, Some(500), 20, false).unwrap();
        assert_eq!(oversized.total_codes, 64);
    }

    #[test]
    fn hardest_is_sorted() {
        let universe = Universe::new(2).unwrap();
        let config = StrategyConfig::new(2, StrategyKind::Simple).unwrap();
        let stats = run_test_all(&config, &universe, None, 70, false).unwrap();

        assert_eq!(stats.hardest.len(), 10);
        assert_eq!(stats.hardest[0].1, stats.max_guesses);
        assert!(stats.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn dummy_fails_almost_everywhere() {
        let universe = Universe::new(2).unwrap();
        let config = StrategyConfig::new(2, StrategyKind::Dummy).unwrap();
        let stats = run_test_all(&config, &universe, None, 5, false).unwrap();

        // Only T0-T1 itself is ever found
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 63);
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }
}
