//! Example generation: adjective + noun drawn from the same frequency
//! bucket, declined in both numbers and written as JSONL.


use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::Rng;
use tracing::{debug, debug_span, info};

use beyging_core::bucket::{BucketPool, Difficulty};
use beyging_core::example::Example;
use beyging_core::inflect::PhraseInflector;
use beyging_core::lexicon::{Category, Lexicon};
use beyging_core::settings::Settings;

use crate::data_dir::DataDir;
use crate::PipelineError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateStats {
    pub written: usize,
    pub discarded: usize,
}

pub struct Generator<'a, L: Lexicon + ?Sized, P: PhraseInflector + ?Sized> {
    lexicon: &'a L,
    inflector: &'a P,
    settings: &'a Settings,
}

impl<'a, L: Lexicon + ?Sized, P: PhraseInflector + ?Sized> Generator<'a, L, P> {
    pub fn new(lexicon: &'a L, inflector: &'a P, settings: &'a Settings) -> Self {
        Self {
            lexicon,
            inflector,
            settings,
        }
    }

    /// Write `count` examples for every difficulty, overwriting
    /// `icelandic-inflection-{hard,medium,easy}.jsonl`.
    pub fn run<G: Rng + ?Sized>(
        &self,
        data: &DataDir,
        count: usize,
        rng: &mut G,
    ) -> Result<Vec<PathBuf>, PipelineError> {
        let mut adjectives = data.adjective_pool();
        let mut nouns = data.noun_pool();
        let mut written = Vec::new();

        for difficulty in Difficulty::ALL {
            let path = data.output(difficulty);
            let mut out = BufWriter::new(File::create(&path)?);
            let stats = self.generate_bucket(
                difficulty.bucket(),
                count,
                &mut adjectives,
                &mut nouns,
                &mut out,
                rng,
            )?;
            out.flush()?;
            info!(
                difficulty = difficulty.label(),
                written = stats.written,
                discarded = stats.discarded,
                path = %path.display(),
                "generated examples"
            );
            written.push(path);
        }
        Ok(written)
    }

    /// Write `count` examples from one bucket to `out`, one JSON object per
    /// line. Draws that cannot be declined are discarded and retried.
    pub fn generate_bucket<W: Write, G: Rng + ?Sized>(
        &self,
        bucket: usize,
        count: usize,
        adjectives: &mut BucketPool,
        nouns: &mut BucketPool,
        out: &mut W,
        rng: &mut G,
    ) -> Result<GenerateStats, PipelineError> {
        let _span = debug_span!("generate_bucket", bucket, count).entered();
        let max_discarded = self.settings.generate.max_discarded_draws;
        let mut stats = GenerateStats::default();
        let mut streak = 0usize;

        while stats.written < count {
            let adjective = adjectives.choose(bucket, rng)?.to_string();
            let noun = nouns.choose(bucket, rng)?.to_string();
            match self.example(&adjective, &noun)? {
                Some(example) => {
                    writeln!(out, "{}", example.to_json_line()?)?;
                    stats.written += 1;
                    streak = 0;
                }
                None => {
                    stats.discarded += 1;
                    streak += 1;
                    if max_discarded > 0 && streak >= max_discarded {
                        return Err(PipelineError::Exhausted {
                            bucket,
                            discarded: streak,
                        });
                    }
                }
            }
        }
        Ok(stats)
    }

    /// Build the example for one adjective/noun pair, or `None` if the
    /// pair has no usable nominative forms in both numbers (typically a
    /// noun without a plural, or a plural-only noun).
    pub fn example(&self, adjective: &str, noun: &str) -> Result<Option<Example>, PipelineError> {
        let Some(gender) = self.lexicon.lookup(noun).into_iter().next().map(|e| e.category) else {
            debug!(noun, "discarded: noun not in lexicon");
            return Ok(None);
        };
        let Some(gender_tag) = gender.gender_tag() else {
            debug!(noun, category = %gender, "discarded: not a noun");
            return Ok(None);
        };

        let adjective_forms = (
            self.first_form(adjective, &Category::Adjective, &[gender_tag, "FSB", "NF", "ET"]),
            self.first_form(adjective, &Category::Adjective, &[gender_tag, "FSB", "NF", "FT"]),
        );
        let (Some(adjective_et), Some(adjective_ft)) = adjective_forms else {
            debug!(adjective, gender = %gender, "discarded: no strong nominative adjective");
            return Ok(None);
        };
        let Some(noun_et) = self.first_form(noun, &gender, &["NF", "ET"]) else {
            debug!(noun, "discarded: no singular");
            return Ok(None);
        };
        let Some(noun_ft) = self.first_form(noun, &gender, &["NF", "FT"]) else {
            debug!(noun, "discarded: no plural");
            return Ok(None);
        };

        let singular = format!("{adjective_et} {noun_et}");
        let plural = format!("{adjective_ft} {noun_ft}");
        let table = self.inflector.table(&singular, &plural)?;
        Ok(Some(Example::new(&self.settings.prompt, &singular, &table)?))
    }

    fn first_form(&self, lemma: &str, category: &Category, tags: &[&str]) -> Option<String> {
        self.lexicon
            .lookup_variants(lemma, category, tags)
            .into_iter()
            .next()
            .map(|e| e.form)
    }
}
