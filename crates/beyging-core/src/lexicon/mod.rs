//! Word-form lexicon (BÍN, Beygingarlýsing íslensks nútímamáls).
//!
//! `Lexicon` is the lookup contract the filters, generator and phrase
//! inflector are written against. `BinLexicon` is the in-memory
//! implementation backed by the BÍN CSV export.

mod bin_lexicon;
mod entry;
mod mark;
#[cfg(test)]
pub(crate) mod testutil;

pub use bin_lexicon::BinLexicon;
pub use entry::{BinEntry, Category, Meaning};
pub use mark::Mark;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub trait Lexicon {
    /// Distinct meanings whose headword is exactly `lemma`.
    fn lookup_lemmas(&self, lemma: &str) -> Vec<Meaning>;

    /// Every entry whose surface form is exactly `word`.
    fn lookup(&self, word: &str) -> Vec<BinEntry>;

    /// Every inflected form of the `(lemma, category)` pair.
    fn lookup_forms(&self, lemma: &str, category: &Category) -> Vec<BinEntry>;

    /// Forms of `(lemma, category)` whose mark carries all of `tags`.
    ///
    /// Forms with the suffixed article are left out unless `gr` is requested.
    /// Primary forms sort before alternative spellings.
    fn lookup_variants(&self, lemma: &str, category: &Category, tags: &[&str]) -> Vec<BinEntry> {
        let mut forms: Vec<BinEntry> = self
            .lookup_forms(lemma, category)
            .into_iter()
            .filter(|e| e.mark.satisfies(tags))
            .collect();
        forms.sort_by_key(|e| e.mark.variant().unwrap_or(0));
        forms
    }
}
