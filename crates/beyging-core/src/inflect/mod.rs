//! Noun-phrase declension.
//!
//! `PhraseInflector` renders a nominative adjective+noun phrase into all
//! four cases for a forced grammatical number. `BinPhraseInflector` does
//! this with plain lexicon lookups.

mod bin_inflector;

pub use bin_inflector::BinPhraseInflector;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
    Genitive,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Self::Nominative,
        Self::Accusative,
        Self::Dative,
        Self::Genitive,
    ];

    /// Case tag as used in BÍN marks.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Nominative => "NF",
            Self::Accusative => "ÞF",
            Self::Dative => "ÞGF",
            Self::Genitive => "EF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Singular => "ET",
            Self::Plural => "FT",
        }
    }
}

/// A phrase in the four cases, serialized with the Icelandic case keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForms {
    pub nf: String,
    #[serde(rename = "þf")]
    pub thf: String,
    #[serde(rename = "þgf")]
    pub thgf: String,
    pub ef: String,
}

impl CaseForms {
    pub fn get(&self, case: Case) -> &str {
        match case {
            Case::Nominative => &self.nf,
            Case::Accusative => &self.thf,
            Case::Dative => &self.thgf,
            Case::Genitive => &self.ef,
        }
    }

    fn set(&mut self, case: Case, phrase: String) {
        let slot = match case {
            Case::Nominative => &mut self.nf,
            Case::Accusative => &mut self.thf,
            Case::Dative => &mut self.thgf,
            Case::Genitive => &mut self.ef,
        };
        *slot = phrase;
    }
}

/// Singular and plural declension of one phrase: the expected answer of an
/// example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionTable {
    pub et: CaseForms,
    pub ft: CaseForms,
}

#[derive(Debug, thiserror::Error)]
pub enum InflectError {
    #[error("empty phrase")]
    EmptyPhrase,

    #[error("no nominative {number} noun '{word}'")]
    UnknownHead { word: String, number: &'static str },

    #[error("no agreeing nominative adjective '{word}'")]
    UnknownModifier { word: String },

    #[error("no form of '{lemma}' for {tags}")]
    MissingForm { lemma: String, tags: String },
}

pub trait PhraseInflector {
    /// Decline a nominative phrase in the given number into all four cases.
    fn decline(&self, phrase: &str, number: Number) -> Result<CaseForms, InflectError>;

    fn table(&self, singular: &str, plural: &str) -> Result<InflectionTable, InflectError> {
        Ok(InflectionTable {
            et: self.decline(singular, Number::Singular)?,
            ft: self.decline(plural, Number::Plural)?,
        })
    }
}
