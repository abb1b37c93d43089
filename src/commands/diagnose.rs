//! Diagnostic commands for checking the hint rules by hand

use super::parse_hint_args;
use crate::core::{Feedback, SolverError, Word};
use crate::solver::{Vocabulary, filter};

/// Check each word against one guess/hint pair
///
/// # Errors
///
/// Returns an error if the guess, hint, or any word is invalid.
pub fn match_words<S: AsRef<str>>(
    guess: &str,
    hint: &str,
    words: &[S],
) -> Result<Vec<(Word, bool)>, SolverError> {
    let feedback = Feedback::parse(guess, hint)?;
    words
        .iter()
        .map(|text| {
            let word = Word::new(text.as_ref())?;
            Ok((word, feedback.matches(&word)))
        })
        .collect()
}

/// Every answer consistent with the given `guess hint` pairs
///
/// Unlike the solver, no words are removed beyond what the hints rule out, and
/// an empty result is not an error.
///
/// # Errors
///
/// Returns an error if the arguments are not valid guess/hint pairs.
pub fn filter_answers<S: AsRef<str>>(
    vocabulary: &Vocabulary,
    hint_args: &[S],
) -> Result<Vec<Word>, SolverError> {
    let history = parse_hint_args(hint_args)?;
    Ok(filter(vocabulary.answers(), &history))
}

/// The hint `guess` would receive if `target` were the answer
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn derive_hint(target: &str, guess: &str) -> Result<Feedback, SolverError> {
    Ok(Feedback::derive(&Word::new(target)?, &Word::new(guess)?))
}
