//! Wordle Entropy
//!
//! A Wordle solver that plays, on every turn, the allowed word whose verdicts
//! are expected to carry the most information about the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy::core::{Word, evaluate};
//! use wordle_entropy::solver::{Solver, SolverConfig};
//! use wordle_entropy::wordlists::Corpus;
//!
//! // Score a guess
//! let guess = Word::new("slate").unwrap();
//! let answer = Word::new("crane").unwrap();
//! assert_eq!(evaluate(&guess, &answer).to_string(), "--G-G");
//!
//! // Solve a game
//! let corpus = Corpus::embedded();
//! let solver = Solver::new(SolverConfig::default(), &corpus);
//! let record = solver.solve("crane").unwrap();
//! assert!(record.won);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Game records, result sinks and statistics
pub mod record;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
