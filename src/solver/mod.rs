//! Wordle solving
//!
//! Candidate filtering, guess selection, and the solve loop, all driven by an
//! explicit `Vocabulary` and `SolverConfig`.

mod config;
mod engine;
pub mod pool;
pub mod selector;
mod vocabulary;

pub use config::{DEFAULT_MAX_GUESSES, DEFAULT_OPENER, HARD_MODE_MAX_GUESSES, SolverConfig};
pub use engine::{GuessStep, SolveStatus, Solution, Solver};
pub use pool::filter;
pub use selector::{score_guess, select_best};
pub use vocabulary::Vocabulary;
