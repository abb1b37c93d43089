//! Solver configuration

use crate::core::Word;

/// Guesses allowed in a normal game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Hard-mode constraints are not guaranteed solvable in six, so allow far more
pub const HARD_MODE_MAX_GUESSES: usize = 99;

/// Opening guess used unless overridden. It is the best first guess for the
/// standard Wordle answer list; the built-in lists are smaller, so a search from
/// scratch over them may pick something else.
pub const DEFAULT_OPENER: &str = "raise";

/// Knobs for one solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guess budget in normal mode
    pub max_guesses: usize,
    /// Restrict guesses to words consistent with every hint so far
    pub hard_mode: bool,
    /// Guess budget in hard mode
    pub hard_mode_max_guesses: usize,
    /// Skip the search on the first turn and guess this instead
    pub opening_guess: Option<Word>,
}

impl SolverConfig {
    /// Configuration with no opening guess
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            hard_mode: false,
            hard_mode_max_guesses: HARD_MODE_MAX_GUESSES,
            opening_guess: None,
        }
    }

    #[must_use]
    pub const fn with_opening_guess(mut self, opening_guess: Option<Word>) -> Self {
        self.opening_guess = opening_guess;
        self
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Guesses available for one solve under the current mode
    #[must_use]
    pub const fn guess_budget(&self) -> usize {
        if self.hard_mode {
            self.hard_mode_max_guesses
        } else {
            self.max_guesses
        }
    }
}

impl Default for SolverConfig {
    /// Six guesses, normal mode, opening with `raise`
    fn default() -> Self {
        Self::new().with_opening_guess(Word::new(DEFAULT_OPENER).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opens_with_raise() {
        let config = SolverConfig::default();
        assert_eq!(config.opening_guess, Some(Word::new("raise").unwrap()));
        assert_eq!(config.guess_budget(), 6);
        assert!(!config.hard_mode);
    }

    #[test]
    fn hard_mode_relaxes_budget() {
        let config = SolverConfig::new().with_hard_mode(true);
        assert_eq!(config.guess_budget(), HARD_MODE_MAX_GUESSES);

        let config = config.with_hard_mode(false).with_max_guesses(3);
        assert_eq!(config.guess_budget(), 3);
    }

    #[test]
    fn new_has_no_opener() {
        assert_eq!(SolverConfig::new().opening_guess, None);
    }
}
