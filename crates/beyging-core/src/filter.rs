//! Lemma eligibility checks.
//!
//! A lemma is kept only if its inflection is unambiguous: a single
//! dictionary meaning of the expected category, and no word form that is
//! shared with another headword or category.

use std::collections::BTreeSet;
use std::fmt;

use crate::frequency::FrequencyIndex;
use crate::lexicon::{Category, Lexicon};
use crate::settings::FilterSettings;

/// Why a lemma was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    ProperNoun,
    DenyListed,
    ExcludedSuffix,
    /// Zero or several dictionary meanings.
    MeaningCount(usize),
    CategoryMismatch { expected: Category, found: Category },
    AmbiguousForm(String),
}

impl Rejection {
    /// Short reason key for stats and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProperNoun => "proper_noun",
            Self::DenyListed => "deny_listed",
            Self::ExcludedSuffix => "excluded_suffix",
            Self::MeaningCount(_) => "meaning_count",
            Self::CategoryMismatch { .. } => "category_mismatch",
            Self::AmbiguousForm(_) => "ambiguous_form",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProperNoun => write!(f, "capitalized (proper noun)"),
            Self::DenyListed => write!(f, "on the deny-list"),
            Self::ExcludedSuffix => write!(f, "excluded suffix"),
            Self::MeaningCount(n) => write!(f, "{n} dictionary meanings"),
            Self::CategoryMismatch { expected, found } => {
                write!(f, "category {found}, expected {expected}")
            }
            Self::AmbiguousForm(form) => write!(f, "word form '{form}' belongs to another lemma"),
        }
    }
}

/// Filters lemmas against a lexicon.
pub struct LemmaFilter<'a, L: Lexicon + ?Sized> {
    lexicon: &'a L,
    settings: &'a FilterSettings,
}

impl<'a, L: Lexicon + ?Sized> LemmaFilter<'a, L> {
    pub fn new(lexicon: &'a L, settings: &'a FilterSettings) -> Self {
        Self { lexicon, settings }
    }

    /// Check a noun lemma of the given gender. Returns its distinct word forms.
    pub fn check_noun(&self, lemma: &str, gender: &Category) -> Result<BTreeSet<String>, Rejection> {
        if lemma.chars().next().is_some_and(char::is_uppercase) {
            return Err(Rejection::ProperNoun);
        }
        if self.settings.avoid_nouns.contains(lemma) {
            return Err(Rejection::DenyListed);
        }
        self.check_unambiguous(lemma, gender)
    }

    /// Check an adjective lemma. Returns its distinct word forms.
    pub fn check_adjective(&self, lemma: &str) -> Result<BTreeSet<String>, Rejection> {
        if lemma.ends_with(&self.settings.excluded_adjective_suffix) {
            return Err(Rejection::ExcludedSuffix);
        }
        if self.settings.avoid_adjectives.contains(lemma) {
            return Err(Rejection::DenyListed);
        }
        self.check_unambiguous(lemma, &Category::Adjective)
    }

    fn check_unambiguous(
        &self,
        lemma: &str,
        category: &Category,
    ) -> Result<BTreeSet<String>, Rejection> {
        let meanings = self.lexicon.lookup_lemmas(lemma);
        let [meaning] = meanings.as_slice() else {
            return Err(Rejection::MeaningCount(meanings.len()));
        };
        if &meaning.category != category {
            return Err(Rejection::CategoryMismatch {
                expected: category.clone(),
                found: meaning.category.clone(),
            });
        }

        let forms: BTreeSet<String> = self
            .lexicon
            .lookup_forms(lemma, category)
            .into_iter()
            .map(|e| e.form)
            .collect();

        for form in &forms {
            let shared = self
                .lexicon
                .lookup(form)
                .iter()
                .any(|e| !e.is_of(lemma, category));
            if shared {
                return Err(Rejection::AmbiguousForm(form.clone()));
            }
        }
        Ok(forms)
    }
}

/// Sum of corpus counts over a lemma's word forms.
pub fn total_frequency<F: FrequencyIndex + ?Sized>(index: &F, forms: &BTreeSet<String>) -> u64 {
    forms.iter().map(|form| index.freq(form)).sum()
}
