//! Robot Mastermind
//!
//! A Mastermind variant played by a robot on a field of eight buttons. The robot
//! enters each guess by driving from button to button, so besides finding the
//! secret quickly it also prefers codes that are short to reach.
//!
//! # Quick Start
//!
//! ```rust
//! use robot_mastermind::core::{Code, Feedback, Universe};
//! use robot_mastermind::solver::{Strategy, StrategyConfig, StrategyKind, StrategyType};
//!
//! let universe = Universe::new(3).unwrap();
//! let config = StrategyConfig::new(3, StrategyKind::Minimax).unwrap();
//! let mut strategy = StrategyType::build(&config, &universe).unwrap();
//!
//! let secret: Code = "1,5,5".parse().unwrap();
//! let mut guess = strategy.reset();
//! while guess != secret {
//!     let feedback = Feedback::calculate(&guess, &secret);
//!     println!("{guess} -> {feedback}");
//!     guess = strategy.guess(feedback)?;
//! }
//! # Ok::<(), robot_mastermind::solver::StrategyError>(())
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Timed robot sessions
pub mod simulation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
