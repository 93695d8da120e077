//! File layout of the data directory.

use std::path::PathBuf;

use beyging_core::bucket::{BucketBuilder, BucketPool, Difficulty};

pub const NOUN_STORE: &str = "nouns";
pub const ADJECTIVE_STORE: &str = "adj";

/// All inputs, intermediate bucket files and outputs live in one directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `lemma,gender` lines.
    pub fn nouns_csv(&self) -> PathBuf {
        self.root.join("nouns.csv")
    }

    /// One adjective lemma per line.
    pub fn adjectives_csv(&self) -> PathBuf {
        self.root.join("adjectives.csv")
    }

    /// Default location of the BÍN CSV export.
    pub fn lexicon(&self) -> PathBuf {
        self.root.join("SHsnid.csv")
    }

    /// Default location of the unigram counts.
    pub fn frequencies(&self) -> PathBuf {
        self.root.join("unigrams.tsv")
    }

    pub fn output(&self, difficulty: Difficulty) -> PathBuf {
        self.root
            .join(format!("icelandic-inflection-{}.jsonl", difficulty.label()))
    }

    pub fn noun_builder(&self) -> BucketBuilder {
        BucketBuilder::new(NOUN_STORE, &self.root)
    }

    pub fn adjective_builder(&self) -> BucketBuilder {
        BucketBuilder::new(ADJECTIVE_STORE, &self.root)
    }

    pub fn noun_pool(&self) -> BucketPool {
        BucketPool::new(NOUN_STORE, &self.root)
    }

    pub fn adjective_pool(&self) -> BucketPool {
        BucketPool::new(ADJECTIVE_STORE, &self.root)
    }
}
