//! Word solving command
//!
//! Solves a specific target word and returns the solution path.

use crate::core::{SolverError, Word};
use crate::solver::{Solution, Solver};
use std::time::{Duration, Instant};

/// A solved target and how long it took
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution: Solution,
    pub elapsed: Duration,
}

/// Solve a specific word
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 lowercase letters)
/// - No answer is consistent with the hints along the way
/// - The guess budget is used up without finding the target
pub fn solve_word(solver: &Solver<'_>, target: &str) -> Result<SolveReport, SolverError> {
    let target = Word::new(target)?;

    let start = Instant::now();
    let solution = solver.solve(&target)?.into_result()?;

    Ok(SolveReport {
        solution,
        elapsed: start.elapsed(),
    })
}
