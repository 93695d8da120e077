use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::{bucket_index, bucket_path, BucketError};

/// Build-side bucket store: bucket index → set of lemmas.
#[derive(Debug)]
pub struct BucketBuilder {
    name: String,
    dir: PathBuf,
    buckets: BTreeMap<usize, BTreeSet<String>>,
}

impl BucketBuilder {
    pub fn new(name: &str, dir: &Path) -> Self {
        Self {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            buckets: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a lemma to the bucket for `freq`. Returns the bucket index.
    pub fn add(&mut self, lemma: &str, freq: u64) -> usize {
        let bucket = bucket_index(freq);
        self.buckets
            .entry(bucket)
            .or_default()
            .insert(lemma.to_string());
        bucket
    }

    pub fn lemmas(&self, bucket: usize) -> Option<&BTreeSet<String>> {
        self.buckets.get(&bucket)
    }

    /// Lemma count per populated bucket.
    pub fn sizes(&self) -> Vec<(usize, usize)> {
        self.buckets
            .iter()
            .map(|(&bucket, lemmas)| (bucket, lemmas.len()))
            .collect()
    }

    /// Write every populated bucket to its file, one lemma per line.
    ///
    /// Buckets larger than `limit` are reduced to a uniform random sample of
    /// exactly `limit` lemmas. Empty buckets produce no file. Each file is
    /// written to `.tmp` first, then renamed into place.
    pub fn persist<R: Rng + ?Sized>(
        &self,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>, BucketError> {
        fs::create_dir_all(&self.dir)?;
        let mut written = Vec::new();
        for (&bucket, lemmas) in &self.buckets {
            if lemmas.is_empty() {
                continue;
            }
            let all: Vec<&String> = lemmas.iter().collect();
            let sample: Vec<&String> = all.choose_multiple(rng, limit).copied().collect();

            let path = bucket_path(&self.dir, &self.name, bucket);
            let tmp = path.with_extension("tmp");
            {
                let mut out = BufWriter::new(File::create(&tmp)?);
                for lemma in &sample {
                    writeln!(out, "{lemma}")?;
                }
                out.flush()?;
            }
            fs::rename(&tmp, &path)?;

            info!(
                store = %self.name,
                bucket,
                total = lemmas.len(),
                written = sample.len(),
                "persisted bucket"
            );
            written.push(path);
        }
        Ok(written)
    }
}
