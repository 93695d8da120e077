//! Grammatical marks (`mark` column of BÍN).
//!
//! A mark is a dash-separated list of chunks. Chunks that spell a case
//! followed by a number (`ÞGFFT`, `NFETgr`, `EFET2`) are split into their
//! case tag, number tag, optional `gr` (suffixed definite article) and an
//! optional variant number. Other chunks (`FSB`, `KK`, `MST`) are tags as-is.

use std::fmt;

const CASES: [&str; 4] = ["ÞGF", "ÞF", "NF", "EF"];
const NUMBERS: [&str; 2] = ["ET", "FT"];
const ARTICLE: &str = "gr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    raw: String,
    tags: Vec<String>,
    variant: Option<u8>,
}

impl Mark {
    pub fn parse(raw: &str) -> Self {
        let mut tags = Vec::new();
        let mut variant = None;
        for chunk in raw.split('-').filter(|c| !c.is_empty()) {
            match split_case_number(chunk) {
                Some((case, number, rest)) => {
                    tags.push(case.to_string());
                    tags.push(number.to_string());
                    let digits = match rest.strip_prefix(ARTICLE) {
                        Some(after) => {
                            tags.push(ARTICLE.to_string());
                            after
                        }
                        None => rest,
                    };
                    if !digits.is_empty() {
                        variant = digits.parse().ok();
                    }
                }
                None => tags.push(chunk.to_string()),
            }
        }
        Self {
            raw: raw.to_string(),
            tags,
            variant,
        }
    }

    pub fn has(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Alternative spelling index (`2`, `3`, ...); `None` for the primary form.
    pub fn variant(&self) -> Option<u8> {
        self.variant
    }

    /// First chunk of an adjective mark: declension/degree (`FSB`, `FVB`, `MST`, ...).
    pub fn leading_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// True if every requested tag is present. Definite-article forms only
    /// match when `gr` is among the requested tags.
    pub fn satisfies(&self, requested: &[&str]) -> bool {
        if self.has(ARTICLE) && !requested.contains(&ARTICLE) {
            return false;
        }
        requested.iter().all(|tag| self.has(tag))
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_case_number(chunk: &str) -> Option<(&'static str, &'static str, &str)> {
    let (case, rest) = CASES
        .iter()
        .find_map(|case| chunk.strip_prefix(case).map(|rest| (*case, rest)))?;
    let (number, rest) = NUMBERS
        .iter()
        .find_map(|number| rest.strip_prefix(number).map(|rest| (*number, rest)))?;
    Some((case, number, rest))
}
