//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! cheap to compare in the inner loops of guess selection.

use super::{SolverError, WORD_LEN};
use std::fmt;
use std::str::FromStr;

/// A validated five-letter word
///
/// Ordering is plain lexicographic byte order. It exists for deterministic
/// iteration and has no gameplay meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` if the text is not exactly five
    /// lowercase ASCII letters. Upper case is rejected, not normalized.
    ///
    /// # Examples
    /// ```
    /// use wordler::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("CRANE").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SolverError> {
        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| SolverError::InvalidWord(text.to_string()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(SolverError::InvalidWord(text.to_string()));
        }

        Ok(Self(letters))
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Get the word as an owned string
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().map(|&b| char::from(b)).collect()
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}
