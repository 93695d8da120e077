//! Frequency buckets of lemmas.
//!
//! Lemmas are assigned to one of `MAX_BUCKETS` order-of-magnitude tiers by
//! summed corpus frequency. `BucketBuilder` collects them (set semantics)
//! and persists a sample per bucket to `{name}-{bucket}.txt`;
//! `BucketPool` reads those files back lazily and draws from them.

mod builder;
mod pool;

pub use builder::BucketBuilder;
pub use pool::BucketPool;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub const MAX_BUCKETS: usize = 3;

/// Bucket index for a summed frequency: `floor(log10(freq))`, saturating
/// at `MAX_BUCKETS - 1`. Frequencies of 0 and 1 land in bucket 0.
pub fn bucket_index(freq: u64) -> usize {
    if freq <= 1 {
        return 0;
    }
    (freq.ilog10() as usize).min(MAX_BUCKETS - 1)
}

/// Path of the persisted file for one bucket of a named store.
pub fn bucket_path(dir: &Path, name: &str, bucket: usize) -> PathBuf {
    dir.join(format!("{name}-{bucket}.txt"))
}

/// Difficulty label of the examples generated from a bucket. Rare words
/// make hard examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Hard,
    Medium,
    Easy,
}

impl Difficulty {
    pub const ALL: [Difficulty; MAX_BUCKETS] = [Self::Hard, Self::Medium, Self::Easy];

    pub fn from_bucket(bucket: usize) -> Option<Self> {
        Self::ALL.get(bucket).copied()
    }

    pub fn bucket(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hard => "hard",
            Self::Medium => "medium",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BucketError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("bucket {bucket} of '{name}' has no lemmas to choose from")]
    Empty { name: String, bucket: usize },
}
