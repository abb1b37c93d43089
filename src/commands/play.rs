//! Play a game against a hidden word
//!
//! Line-based: each line of input is one guess, each reply is the hint in
//! `g`/`y`/`.` form. Input and output are generic so a game can be scripted.

use crate::core::{Feedback, SolverError, Word};
use crate::solver::{SolverConfig, Vocabulary};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { guesses: usize },
    Lost,
    /// Input ended before the game did
    Quit,
}

/// Pick a hidden word from the answer list
pub fn random_target<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Option<Word> {
    vocabulary.answers().choose(rng).copied()
}

/// Play one game
///
/// Guesses must be in the guess list, and in hard mode must also fit every
/// hint given so far; anything else is refused and asked for again.
///
/// # Errors
///
/// Returns an error on I/O failure reading guesses or writing hints.
pub fn play_game<R: BufRead, W: Write>(
    vocabulary: &Vocabulary,
    config: &SolverConfig,
    target: Word,
    mut input: R,
    mut output: W,
    verbose: bool,
) -> Result<PlayOutcome, SolverError> {
    let mut history: Vec<Feedback> = Vec::new();

    for turn in 1..=config.max_guesses {
        let accept = |word: &Word| {
            vocabulary.is_allowed_guess(word)
                && (!config.hard_mode || history.iter().all(|fb| fb.matches(word)))
        };
        let Some(guess) = read_guess(&mut input, &mut output, turn, verbose, accept)? else {
            return Ok(PlayOutcome::Quit);
        };

        if guess == target {
            if verbose {
                writeln!(
                    output,
                    "Correct! Answer \"{target}\" was found in {turn} tries."
                )?;
            }
            return Ok(PlayOutcome::Won { guesses: turn });
        }

        let feedback = Feedback::derive(&target, &guess);
        if verbose {
            writeln!(output, "          {}", feedback.hint_text())?;
        } else {
            writeln!(output, "{}", feedback.hint_text())?;
        }
        history.push(feedback);
    }

    writeln!(
        output,
        "Answer \"{target}\" was not found in {} tries.",
        config.max_guesses
    )?;
    Ok(PlayOutcome::Lost)
}

/// Read lines until one is an acceptable guess; `None` at end of input
fn read_guess<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    turn: usize,
    verbose: bool,
    accept: impl Fn(&Word) -> bool,
) -> Result<Option<Word>, SolverError> {
    loop {
        if verbose {
            write!(output, "Guess #{turn}: ")?;
            output.flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match Word::new(line.trim()) {
            Ok(word) if accept(&word) => return Ok(Some(word)),
            _ => writeln!(output, "Invalid guess - try again")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["crane", "slate", "block", "grade", "frame"]).unwrap(),
            words_from_slice(&["raise"]).unwrap(),
        )
    }

    fn play(script: &str, config: &SolverConfig) -> (PlayOutcome, String) {
        let vocab = vocabulary();
        let target = Word::new("crane").unwrap();
        let mut output = Vec::new();
        let outcome =
            play_game(&vocab, config, target, script.as_bytes(), &mut output, false).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn win_after_hint() {
        let (outcome, output) = play("raise\ncrane\n", &SolverConfig::default());
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert_eq!(output, "yy..g\n");
    }

    #[test]
    fn unknown_words_are_refused() {
        let (outcome, output) = play("zzzzz\nCRANE\ncrane\n", &SolverConfig::default());
        assert_eq!(outcome, PlayOutcome::Won { guesses: 1 });
        assert_eq!(output.matches("Invalid guess").count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, _) = play("raise\n", &SolverConfig::default());
        assert_eq!(outcome, PlayOutcome::Quit);
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let script = "slate\nblock\ngrade\nframe\nraise\nslate\n";
        let (outcome, output) = play(script, &SolverConfig::default());
        assert_eq!(outcome, PlayOutcome::Lost);
        assert!(output.ends_with("Answer \"crane\" was not found in 6 tries.\n"));
    }

    #[test]
    fn hard_mode_refuses_inconsistent_guesses() {
        let config = SolverConfig::default().with_hard_mode(true);
        // BLOCK ignores the yellow r and a from RAISE
        let (outcome, output) = play("raise\nblock\ncrane\n", &config);
        assert_eq!(outcome, PlayOutcome::Won { guesses: 2 });
        assert!(output.contains("Invalid guess"));
    }

    #[test]
    fn verbose_prompts_and_congratulates() {
        let vocab = vocabulary();
        let mut output = Vec::new();
        let outcome = play_game(
            &vocab,
            &SolverConfig::default(),
            Word::new("crane").unwrap(),
            "crane\n".as_bytes(),
            &mut output,
            true,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(outcome, PlayOutcome::Won { guesses: 1 });
        assert!(output.starts_with("Guess #1: "));
        assert!(output.contains("Correct! Answer \"crane\" was found in 1 tries."));
    }

    #[test]
    fn random_target_is_an_answer() {
        let vocab = vocabulary();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let target = random_target(&vocab, &mut rng).unwrap();
            assert!(vocab.answers().contains(&target));
        }
    }

    #[test]
    fn random_target_of_empty_vocabulary() {
        let vocab = Vocabulary::new(vec![], vec![]);
        assert_eq!(random_target(&vocab, &mut rand::rng()), None);
    }
}
