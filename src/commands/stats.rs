//! Results file parsing and summary statistics
//!
//! A results file has one `<word>, <count>` line per solved answer, exactly
//! as printed by the solve-all command.

use crate::core::{SolverError, WORD_LEN, Word};
use crate::solver::HARD_MODE_MAX_GUESSES;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// One line of a results file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsRecord {
    pub answer: Word,
    pub guesses: usize,
}

impl FromStr for ResultsRecord {
    type Err = SolverError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| SolverError::MalformedResultsRecord {
            line: line.to_string(),
            reason: reason.to_string(),
        };

        let (word, count) = line
            .trim_end()
            .split_once(',')
            .ok_or_else(|| malformed("missing ','"))?;
        if word.len() < WORD_LEN {
            return Err(malformed("word too short"));
        }
        let answer = Word::new(word).map_err(|e| malformed(&e.to_string()))?;
        let guesses: usize = count
            .trim_start_matches(' ')
            .parse()
            .map_err(|_| malformed("guess count is not a number"))?;
        if guesses > HARD_MODE_MAX_GUESSES {
            return Err(malformed("guess count is larger than any solve allows"));
        }

        Ok(Self { answer, guesses })
    }
}

impl fmt::Display for ResultsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.answer, self.guesses)
    }
}

/// Read every record from a results stream
///
/// # Errors
///
/// `Io` on read failure, `MalformedResultsRecord` for the first bad line.
pub fn read_results<R: BufRead>(reader: R) -> Result<Vec<ResultsRecord>, SolverError> {
    reader
        .lines()
        .map(|line| -> Result<ResultsRecord, SolverError> { line?.parse() })
        .collect()
}

/// Load records from a file, or from stdin when no path is given
///
/// # Errors
///
/// See `read_results`; also `Io` if the file cannot be opened.
pub fn load_results(path: Option<&Path>) -> Result<Vec<ResultsRecord>, SolverError> {
    match path {
        Some(path) => read_results(BufReader::new(File::open(path)?)),
        None => read_results(io::stdin().lock()),
    }
}

/// Summary of a results file
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsStats {
    pub count: usize,
    /// First record with the fewest guesses
    pub min: ResultsRecord,
    /// First record with the most guesses
    pub max: ResultsRecord,
    pub mean: f64,
    /// `histogram[n]` is how many answers took `n` guesses, for `n` in `0..=max`
    pub histogram: Vec<usize>,
}

impl ResultsStats {
    /// Summarize records; `None` when there are none
    #[must_use]
    pub fn from_records(records: &[ResultsRecord]) -> Option<Self> {
        let first = *records.first()?;

        let (min, max, total) = records.iter().fold(
            (first, first, 0usize),
            |(min, max, total), &next| {
                (
                    if next.guesses < min.guesses { next } else { min },
                    if next.guesses > max.guesses { next } else { max },
                    total.saturating_add(next.guesses),
                )
            },
        );

        let mut histogram = vec![0; max.guesses + 1];
        for record in records {
            histogram[record.guesses] += 1;
        }

        Some(Self {
            count: records.len(),
            min,
            max,
            mean: total as f64 / records.len() as f64,
            histogram,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, guesses: usize) -> ResultsRecord {
        ResultsRecord {
            answer: Word::new(word).unwrap(),
            guesses,
        }
    }

    #[test]
    fn parses_standard_line() {
        assert_eq!("atlas, 3".parse::<ResultsRecord>().unwrap(), record("atlas", 3));
        assert_eq!("atlas,4".parse::<ResultsRecord>().unwrap(), record("atlas", 4));
        assert_eq!("atlas,   5\r".parse::<ResultsRecord>().unwrap(), record("atlas", 5));
    }

    #[test]
    fn display_matches_file_format() {
        let line = record("crane", 4).to_string();
        assert_eq!(line, "crane, 4");
        assert_eq!(line.parse::<ResultsRecord>().unwrap(), record("crane", 4));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["atlas 3", "atl, 3", "atlases, 3", "ATLAS, 3", "atlas, x", "atlas, -1", "atlas,", ""] {
            assert!(
                matches!(
                    line.parse::<ResultsRecord>(),
                    Err(SolverError::MalformedResultsRecord { .. })
                ),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_guess_counts() {
        assert_eq!(
            "atlas, 99".parse::<ResultsRecord>().unwrap(),
            record("atlas", HARD_MODE_MAX_GUESSES)
        );
        for line in ["atlas, 100", "atlas, 4000000000", "atlas, 18446744073709551615"] {
            assert!(
                matches!(
                    line.parse::<ResultsRecord>(),
                    Err(SolverError::MalformedResultsRecord { .. })
                ),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn huge_count_fails_read_instead_of_stats() {
        let input = "crane, 3\natlas, 18446744073709551615\n";
        assert!(matches!(
            read_results(input.as_bytes()),
            Err(SolverError::MalformedResultsRecord { .. })
        ));
    }

    #[test]
    fn reads_multiple_lines() {
        let input = "crane, 3\nslate, 2\ngeese, 5\n";
        let records = read_results(input.as_bytes()).unwrap();
        assert_eq!(
            records,
            [record("crane", 3), record("slate", 2), record("geese", 5)]
        );
    }

    #[test]
    fn read_stops_at_bad_line() {
        let input = "crane, 3\nbogus\nslate, 2\n";
        assert!(read_results(input.as_bytes()).is_err());
    }

    #[test]
    fn stats_min_max_mean_histogram() {
        let records = [
            record("crane", 3),
            record("slate", 2),
            record("geese", 5),
            record("block", 2),
            record("evade", 5),
            record("irate", 4),
        ];
        let stats = ResultsStats::from_records(&records).unwrap();

        assert_eq!(stats.count, 6);
        // First of the ties wins
        assert_eq!(stats.min, record("slate", 2));
        assert_eq!(stats.max, record("geese", 5));
        assert!((stats.mean - 21.0 / 6.0).abs() < 1e-9);
        assert_eq!(stats.histogram, [0, 0, 2, 1, 1, 2]);
    }

    #[test]
    fn stats_of_nothing() {
        assert!(ResultsStats::from_records(&[]).is_none());
    }
}
