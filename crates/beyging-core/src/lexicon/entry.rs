use std::fmt;

use super::mark::Mark;

/// Word class of a BÍN headword. Nouns carry their gender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Masculine,
    Feminine,
    Neuter,
    Adjective,
    Other(String),
}

impl Category {
    /// Parse a BÍN category code (`kk`, `kvk`, `hk`, `lo`, ...).
    pub fn from_code(code: &str) -> Self {
        match code {
            "kk" => Self::Masculine,
            "kvk" => Self::Feminine,
            "hk" => Self::Neuter,
            "lo" => Self::Adjective,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Masculine => "kk",
            Self::Feminine => "kvk",
            Self::Neuter => "hk",
            Self::Adjective => "lo",
            Self::Other(code) => code,
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(self, Self::Masculine | Self::Feminine | Self::Neuter)
    }

    /// Gender tag as it appears in adjective marks (`FSB-KK-NFET`).
    pub fn gender_tag(&self) -> Option<&'static str> {
        match self {
            Self::Masculine => Some("KK"),
            Self::Feminine => Some("KVK"),
            Self::Neuter => Some("HK"),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One dictionary meaning: a headword with its id and category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meaning {
    pub lemma: String,
    pub id: u32,
    pub category: Category,
}

/// A single inflected form of a headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinEntry {
    pub lemma: String,
    pub id: u32,
    pub category: Category,
    pub form: String,
    pub mark: Mark,
}

impl BinEntry {
    pub fn meaning(&self) -> Meaning {
        Meaning {
            lemma: self.lemma.clone(),
            id: self.id,
            category: self.category.clone(),
        }
    }

    /// Whether this entry belongs to the given `(lemma, category)` pair.
    pub fn is_of(&self, lemma: &str, category: &Category) -> bool {
        self.lemma == lemma && &self.category == category
    }
}
