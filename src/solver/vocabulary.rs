//! The word lists a solver works from

use crate::core::{SolverError, Word};
use crate::wordlists::{ANSWERS, EXTRA_GUESSES, loader::words_from_slice};
use rustc_hash::FxHashSet;

/// Answer vocabulary plus the list of words that may be guessed
///
/// The guess list is the answers followed by the extra dictionary words, so
/// when two guesses score the same the plausible answer wins the tie.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build from an answer list and a list of additional guessable words
    #[must_use]
    pub fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let guesses: Vec<Word> = answers.iter().chain(&extra_guesses).copied().collect();
        let allowed = guesses.iter().copied().collect();

        Self {
            answers,
            guesses,
            allowed,
        }
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    /// `InvalidWord` if an embedded entry is malformed, which the build script
    /// already rules out.
    pub fn embedded() -> Result<Self, SolverError> {
        let answers = words_from_slice(ANSWERS)?;
        let extra = words_from_slice(EXTRA_GUESSES)?;
        log::info!(
            "Loaded embedded vocabulary: {} answers, {} extra guesses",
            answers.len(),
            extra.len()
        );
        Ok(Self::new(answers, extra))
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Is `word` in the guess list?
    #[must_use]
    pub fn is_allowed_guess(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}
