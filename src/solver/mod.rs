//! Code-breaking strategies
//!
//! Consistency filtering, feedback partitions, the four scoring criteria and
//! the strategies built on top of them.

pub mod criterion;
mod engine;
pub mod filter;
pub mod partition;
pub mod selection;
pub mod strategy;

pub use criterion::{Criterion, Entropy, ExpectedSize, Minimax, MostParts};
pub use engine::{CriterionStrategy, GameState, SimpleStrategy, StrategyError};
pub use filter::{filter_consistent, is_consistent, retain_consistent};
pub use partition::{Part, Partition};
pub use selection::{BestGuesses, best_guesses, choose, prefer_consistent, shortest_code};
pub use strategy::{
    DummyStrategy, RandomStrategy, Strategy, StrategyConfig, StrategyKind, StrategyType,
};
