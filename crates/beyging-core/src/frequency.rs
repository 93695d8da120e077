//! Corpus frequency lookups.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum FrequencyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub trait FrequencyIndex {
    /// Number of corpus occurrences of `word`; 0 if unseen.
    fn freq(&self, word: &str) -> u64;
}

/// Unigram counts held in memory.
#[derive(Debug, Default)]
pub struct UnigramCounts {
    counts: HashMap<String, u64>,
}

impl UnigramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `word<whitespace>count` lines. Lines that do not end in a
    /// count are skipped; repeated words are summed.
    pub fn open(path: &Path) -> Result<Self, FrequencyError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, FrequencyError> {
        let mut counts = Self::new();
        let mut skipped = 0u64;
        for line in reader.lines() {
            let line = line?;
            let Some((word, count)) = line.trim().rsplit_once(char::is_whitespace) else {
                skipped += 1;
                continue;
            };
            let Ok(count) = count.parse::<u64>() else {
                skipped += 1;
                continue;
            };
            counts.add(word.trim_end(), count);
        }
        info!(words = counts.counts.len(), skipped, "loaded unigram counts");
        Ok(counts)
    }

    pub fn add(&mut self, word: &str, count: u64) {
        *self.counts.entry(word.to_string()).or_default() += count;
    }
}

impl FromIterator<(String, u64)> for UnigramCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (word, count) in iter {
            counts.add(&word, count);
        }
        counts
    }
}

impl FrequencyIndex for UnigramCounts {
    fn freq(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn unknown_word_is_zero() {
        let counts = UnigramCounts::new();
        assert_eq!(counts.freq("hestur"), 0);
    }

    #[test]
    fn parse_tab_and_space_separated() {
        let input = "hestur\t120\nhest 30\n\nbroken\nhesti\tmany\n";
        let counts = UnigramCounts::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(counts.freq("hestur"), 120);
        assert_eq!(counts.freq("hest"), 30);
        assert_eq!(counts.freq("hesti"), 0);
        assert_eq!(counts.freq("broken"), 0);
    }

    #[test]
    fn repeated_words_are_summed() {
        let counts: UnigramCounts = [("borg".to_string(), 5), ("borg".to_string(), 7)]
            .into_iter()
            .collect();
        assert_eq!(counts.freq("borg"), 12);
    }

    #[test]
    fn open_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unigrams.tsv");
        std::fs::write(&path, "góður\t4200\n").unwrap();
        let counts = UnigramCounts::open(&path).unwrap();
        assert_eq!(counts.freq("góður"), 4200);
    }
}
