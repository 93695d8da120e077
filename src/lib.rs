//! Evaluation datasets for Icelandic noun-phrase inflection.
//!
//! Lemma lists are filtered for unambiguous inflection, bucketed by corpus
//! frequency (`corpus`), and later combined into adjective+noun examples
//! with their full case/number declension (`generate`). Dictionary,
//! frequency and phrase-inflection services are passed in explicitly.

pub mod corpus;
pub mod data_dir;
pub mod generate;
#[cfg(test)]
mod testutil;
mod trace_init;

use std::io;

pub use beyging_core::{bucket, example, filter, frequency, inflect, lexicon, settings};
pub use trace_init::{init_tracing, TraceGuard};

use beyging_core::bucket::BucketError;
use beyging_core::inflect::InflectError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("bucket error: {0}")]
    Bucket(#[from] BucketError),

    #[error("inflection error: {0}")]
    Inflect(#[from] InflectError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gave up on bucket {bucket} after {discarded} discarded draws in a row")]
    Exhausted { bucket: usize, discarded: usize },
}
