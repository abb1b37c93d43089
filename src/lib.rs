//! Wordler
//!
//! A Wordle solver that, at each step, guesses the word expected to leave the
//! fewest candidate answers.
//!
//! # Quick Start
//!
//! ```rust
//! use wordler::core::{Feedback, Word};
//! use wordler::solver::{Solver, SolverConfig, Vocabulary};
//!
//! // Hint for guessing "raise" when the answer is "geese"
//! let target = Word::new("geese").unwrap();
//! let guess = Word::new("raise").unwrap();
//! let feedback = Feedback::derive(&target, &guess);
//! assert_eq!(feedback.hint_text(), "...gg");
//!
//! // Solve against the built-in word lists
//! let vocabulary = Vocabulary::embedded().unwrap();
//! let solver = Solver::new(&vocabulary, SolverConfig::default());
//! let solution = solver.solve(&target).unwrap();
//! assert!(solution.is_solved());
//! ```

// Core domain types
pub mod core;

// Candidate filtering, guess selection, and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
