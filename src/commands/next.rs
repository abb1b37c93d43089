//! Next-guess command
//!
//! Given the hints seen so far, suggest what to guess next.

use super::parse_hint_args;
use crate::core::{SolverError, Word};
use crate::solver::Solver;
use std::time::{Duration, Instant};

/// A suggested guess
#[derive(Debug, Clone)]
pub struct NextGuess {
    pub guess: Word,
    /// True when no hints were given and the configured opener was used
    pub is_opener: bool,
    pub elapsed: Duration,
}

/// Suggest the next guess from `guess hint` argument pairs
///
/// # Errors
///
/// Returns an error if the arguments are not valid guess/hint pairs or no
/// answer fits all of the hints.
pub fn suggest_next<S: AsRef<str>>(
    solver: &Solver<'_>,
    hint_args: &[S],
) -> Result<NextGuess, SolverError> {
    let history = parse_hint_args(hint_args)?;
    let is_opener = history.is_empty() && solver.config().opening_guess.is_some();

    let start = Instant::now();
    let guess = solver.next_guess(&history)?;

    Ok(NextGuess {
        guess,
        is_opener,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, Vocabulary};
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["crane", "slate", "irate", "crate", "grate", "block"]).unwrap(),
            words_from_slice(&["salet", "glyph"]).unwrap(),
        )
    }

    #[test]
    fn opener_without_hints() {
        let vocab = vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());
        let args: [&str; 0] = [];

        let next = suggest_next(&solver, &args).unwrap();
        assert!(next.is_opener);
        assert_eq!(next.guess.text(), "raise");
    }

    #[test]
    fn hints_narrow_to_single_answer() {
        let vocab = vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());

        let next = suggest_next(&solver, &["raise", "....."]).unwrap();
        assert!(!next.is_opener);
        assert_eq!(next.guess.text(), "block");
    }

    #[test]
    fn odd_arguments_rejected() {
        let vocab = vocabulary();
        let solver = Solver::new(&vocab, SolverConfig::default());

        assert!(matches!(
            suggest_next(&solver, &["raise"]),
            Err(SolverError::OddHintArguments(1))
        ));
    }
}
