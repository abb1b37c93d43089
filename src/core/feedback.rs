//! Wordle feedback: a guess paired with its per-letter hints
//!
//! Two rules live here. `Feedback::derive` computes what a guess would be told
//! against a known target, and `Feedback::matches` decides whether a word could
//! still be the target given that feedback. Both resolve duplicate letters by
//! letting greens claim their letters first.
//!
//! Hints are written with one character per letter: `g` green, `y` yellow,
//! `.` grey. Logs and results files depend on this encoding.

use super::{SolverError, WORD_LEN, Word};
use std::fmt;

/// Hint for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSymbol {
    /// Right letter, right position
    Green,
    /// Letter occurs elsewhere in the target
    Yellow,
    /// Letter absent, or every occurrence already accounted for
    Grey,
}

impl HintSymbol {
    /// Parse a hint character (`g`, `y` or `.`)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Self::Green),
            'y' => Some(Self::Yellow),
            '.' => Some(Self::Grey),
            _ => None,
        }
    }

    /// The character this hint is written as
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Grey => '.',
        }
    }
}

/// A guess and the hint it received
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Word,
    hints: [HintSymbol; WORD_LEN],
}

impl Feedback {
    #[must_use]
    pub const fn new(guess: Word, hints: [HintSymbol; WORD_LEN]) -> Self {
        Self { guess, hints }
    }

    /// Build feedback from text, as typed by a user or given on the command line
    ///
    /// # Errors
    /// `InvalidWord` if the guess is not a valid word, `InvalidHint` if the hint
    /// is not exactly five of `g`, `y` and `.`.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Feedback, Word};
    ///
    /// let fb = Feedback::parse("raise", ".y..g").unwrap();
    /// assert!(fb.matches(&Word::new("evade").unwrap()));
    /// assert!(!fb.matches(&Word::new("geese").unwrap()));
    /// assert!(Feedback::parse("raise", "gyb..").is_err());
    /// ```
    pub fn parse(guess: &str, hint: &str) -> Result<Self, SolverError> {
        let guess = Word::new(guess)?;
        let invalid = || SolverError::InvalidHint(hint.to_string());

        let symbols = hint
            .chars()
            .map(|c| HintSymbol::from_char(c).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;
        let hints: [HintSymbol; WORD_LEN] = symbols.try_into().map_err(|_| invalid())?;

        Ok(Self::new(guess, hints))
    }

    /// The feedback `guess` receives when `target` is the hidden word
    ///
    /// Greens are assigned first and consume their letter in both words. Each
    /// remaining guess letter, left to right, then claims the leftmost unclaimed
    /// equal letter of the target as a yellow. Whatever is left is grey.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::{Feedback, Word};
    ///
    /// let target = Word::new("geese").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// assert_eq!(Feedback::derive(&target, &guess).hint_text(), "y..gg");
    /// ```
    #[must_use]
    pub fn derive(target: &Word, guess: &Word) -> Self {
        let mut target_left: [Option<u8>; WORD_LEN] = target.letters().map(Some);
        let mut guess_left: [Option<u8>; WORD_LEN] = guess.letters().map(Some);
        let mut hints = [HintSymbol::Grey; WORD_LEN];

        // Allow: Index needed to consume the same position in both words
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess_left[i] == target_left[i] {
                hints[i] = HintSymbol::Green;
                guess_left[i] = None;
                target_left[i] = None;
            }
        }

        for (hint, letter) in hints.iter_mut().zip(guess_left) {
            let Some(letter) = letter else { continue };
            if let Some(slot) = target_left.iter_mut().find(|t| **t == Some(letter)) {
                *slot = None;
                *hint = HintSymbol::Yellow;
            }
        }

        Self::new(*guess, hints)
    }

    /// Could `candidate` be the hidden word, given this feedback?
    ///
    /// Three ordered passes share one "accounted for" marker per position:
    /// greens must match exactly and claim their position; each yellow claims
    /// the leftmost unclaimed occurrence of its letter that is not a position
    /// where the same letter was itself marked yellow; greys reject any
    /// unclaimed occurrence of their letter.
    #[must_use]
    pub fn matches(&self, candidate: &Word) -> bool {
        let guess = self.guess.letters();
        let word = candidate.letters();
        let mut claimed = [false; WORD_LEN];

        for pos in self.positions(HintSymbol::Green) {
            if word[pos] != guess[pos] {
                return false;
            }
            claimed[pos] = true;
        }

        for pos in self.positions(HintSymbol::Yellow) {
            let letter = guess[pos];
            let found = (0..WORD_LEN).find(|&j| {
                word[j] == letter
                    && !claimed[j]
                    && !(self.hints[j] == HintSymbol::Yellow && guess[j] == letter)
            });
            match found {
                Some(j) => claimed[j] = true,
                None => return false,
            }
        }

        for pos in self.positions(HintSymbol::Grey) {
            let letter = guess[pos];
            if (0..WORD_LEN).any(|j| word[j] == letter && !claimed[j]) {
                return false;
            }
        }

        true
    }

    fn positions(&self, symbol: HintSymbol) -> impl Iterator<Item = usize> + '_ {
        self.hints
            .iter()
            .enumerate()
            .filter(move |(_, h)| **h == symbol)
            .map(|(pos, _)| pos)
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[HintSymbol; WORD_LEN] {
        &self.hints
    }

    /// All greens
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hints.iter().all(|h| *h == HintSymbol::Green)
    }

    /// The hint in its textual encoding, e.g. `"y..gg"`
    #[must_use]
    pub fn hint_text(&self) -> String {
        self.hints.iter().map(|h| h.to_char()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.hint_text())
    }
}
