//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use simple::{Command, parse_command, run_simple};
pub use simulate::{SimulateConfig, SimulateResult, run_simulations};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
pub use test_all::{CodeTestResult, TestAllStatistics, run_test_all};
