//! Timed robot sessions
//!
//! A simulation lets one strategy play against a stream of random secrets until
//! the robot has used up its time budget, then reports how many codes it cracked
//! and in which round.

mod run;
mod statistics;

pub use run::{Simulation, SimulationConfig, driving_time_ms};
pub use statistics::{ROUND_COLUMNS, SimulationReport, Statistics};
