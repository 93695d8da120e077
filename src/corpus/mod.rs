//! Corpus processors: lemma list → filters → frequency → bucket files.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};

use rand::Rng;
use tracing::{debug, debug_span, info};

use beyging_core::bucket::BucketBuilder;
use beyging_core::filter::{total_frequency, LemmaFilter, Rejection};
use beyging_core::frequency::FrequencyIndex;
use beyging_core::lexicon::{Category, Lexicon};
use beyging_core::settings::Settings;

use crate::data_dir::DataDir;
use crate::PipelineError;

/// Counters for one pass over a lemma list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub lines: u64,
    /// Blank or malformed lines.
    pub skipped_lines: u64,
    pub kept: u64,
    /// Rejections by `Rejection::kind`.
    pub rejected: BTreeMap<&'static str, u64>,
}

impl ProcessStats {
    pub fn rejected_total(&self) -> u64 {
        self.rejected.values().sum()
    }

    fn reject(&mut self, rejection: &Rejection) {
        *self.rejected.entry(rejection.kind()).or_default() += 1;
    }
}

/// Parse a `lemma,gender` line. Lines without exactly two fields are `None`.
pub fn parse_noun_line(line: &str) -> Option<(&str, Category)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut fields = line.split(',');
    let (Some(lemma), Some(gender), None) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    if lemma.is_empty() {
        return None;
    }
    Some((lemma, Category::from_code(gender)))
}

/// Parse a single-lemma line.
pub fn parse_adjective_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.contains(',') {
        return None;
    }
    Some(line)
}

pub struct CorpusProcessor<'a, L: Lexicon + ?Sized, F: FrequencyIndex + ?Sized> {
    lexicon: &'a L,
    frequencies: &'a F,
    settings: &'a Settings,
}

impl<'a, L: Lexicon + ?Sized, F: FrequencyIndex + ?Sized> CorpusProcessor<'a, L, F> {
    pub fn new(lexicon: &'a L, frequencies: &'a F, settings: &'a Settings) -> Self {
        Self {
            lexicon,
            frequencies,
            settings,
        }
    }

    /// Process `nouns.csv` and write the sampled `nouns-N.txt` buckets.
    pub fn run_nouns<G: Rng + ?Sized>(
        &self,
        data: &DataDir,
        rng: &mut G,
    ) -> Result<ProcessStats, PipelineError> {
        let input = BufReader::new(File::open(data.nouns_csv())?);
        let mut store = data.noun_builder();
        let stats = self.process_nouns(input, &mut store)?;
        store.persist(self.settings.buckets.noun_samples, rng)?;
        Ok(stats)
    }

    /// Process `adjectives.csv` and write the sampled `adj-N.txt` buckets.
    pub fn run_adjectives<G: Rng + ?Sized>(
        &self,
        data: &DataDir,
        rng: &mut G,
    ) -> Result<ProcessStats, PipelineError> {
        let input = BufReader::new(File::open(data.adjectives_csv())?);
        let mut store = data.adjective_builder();
        let stats = self.process_adjectives(input, &mut store)?;
        store.persist(self.settings.buckets.adjective_samples, rng)?;
        Ok(stats)
    }

    pub fn process_nouns<R: BufRead>(
        &self,
        input: R,
        store: &mut BucketBuilder,
    ) -> Result<ProcessStats, PipelineError> {
        let filter = LemmaFilter::new(self.lexicon, &self.settings.filters);
        self.process(input, store, |line| {
            let (lemma, gender) = parse_noun_line(line)?;
            Some((lemma.to_string(), filter.check_noun(lemma, &gender)))
        })
    }

    pub fn process_adjectives<R: BufRead>(
        &self,
        input: R,
        store: &mut BucketBuilder,
    ) -> Result<ProcessStats, PipelineError> {
        let filter = LemmaFilter::new(self.lexicon, &self.settings.filters);
        self.process(input, store, |line| {
            let lemma = parse_adjective_line(line)?;
            Some((lemma.to_string(), filter.check_adjective(lemma)))
        })
    }

    fn process<R: BufRead>(
        &self,
        input: R,
        store: &mut BucketBuilder,
        check: impl Fn(&str) -> Option<(String, Result<BTreeSet<String>, Rejection>)>,
    ) -> Result<ProcessStats, PipelineError> {
        let _span = debug_span!("process", store = store.name()).entered();
        let mut stats = ProcessStats::default();

        for line in input.lines() {
            let line = line?;
            stats.lines += 1;
            let Some((lemma, verdict)) = check(&line) else {
                stats.skipped_lines += 1;
                continue;
            };
            match verdict {
                Ok(forms) => {
                    let freq = total_frequency(self.frequencies, &forms);
                    let bucket = store.add(&lemma, freq);
                    stats.kept += 1;
                    debug!(lemma = lemma.as_str(), freq, bucket, "kept");
                }
                Err(rejection) => {
                    debug!(lemma = lemma.as_str(), reason = %rejection, "rejected");
                    stats.reject(&rejection);
                }
            }
        }

        info!(
            store = store.name(),
            lines = stats.lines,
            kept = stats.kept,
            rejected = stats.rejected_total(),
            skipped_lines = stats.skipped_lines,
            buckets = ?store.sizes(),
            "processed lemma list"
        );
        Ok(stats)
    }
}
