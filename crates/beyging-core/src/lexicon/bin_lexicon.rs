use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use super::{BinEntry, Category, Lexicon, LexiconError, Mark, Meaning};

/// In-memory BÍN lexicon indexed by headword and by surface form.
#[derive(Debug, Default)]
pub struct BinLexicon {
    entries: Vec<BinEntry>,
    by_lemma: HashMap<String, Vec<usize>>,
    by_form: HashMap<String, Vec<usize>>,
}

impl BinLexicon {
    pub fn from_entries(entries: Vec<BinEntry>) -> Self {
        let mut by_lemma: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_form: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            by_lemma.entry(entry.lemma.clone()).or_default().push(idx);
            by_form.entry(entry.form.clone()).or_default().push(idx);
        }
        Self {
            entries,
            by_lemma,
            by_form,
        }
    }

    /// Load the BÍN "Sigrúnarsnið" export: `lemma;id;category;domain;form;mark`.
    ///
    /// Blank lines and lines with the wrong field count or a non-numeric id
    /// are skipped.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut entries = Vec::new();
        let mut total_lines = 0u64;
        let mut skipped = 0u64;

        for line in reader.lines() {
            let line = line?;
            total_lines += 1;
            let Some(entry) = parse_line(line.trim()) else {
                skipped += 1;
                continue;
            };
            entries.push(entry);
        }

        info!(
            entries = entries.len(),
            skipped, total_lines, "loaded BÍN lexicon"
        );
        Ok(Self::from_entries(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entries_at<'a>(
        &'a self,
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a BinEntry> + 'a {
        indices
            .into_iter()
            .flatten()
            .map(move |&idx| &self.entries[idx])
    }
}

fn parse_line(line: &str) -> Option<BinEntry> {
    if line.is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 6 {
        return None;
    }
    let id: u32 = fields[1].parse().ok()?;
    Some(BinEntry {
        lemma: fields[0].to_string(),
        id,
        category: Category::from_code(fields[2]),
        form: fields[4].to_string(),
        mark: Mark::parse(fields[5]),
    })
}

impl Lexicon for BinLexicon {
    fn lookup_lemmas(&self, lemma: &str) -> Vec<Meaning> {
        let mut meanings: Vec<Meaning> = Vec::new();
        for entry in self.entries_at(self.by_lemma.get(lemma)) {
            let meaning = entry.meaning();
            if !meanings.contains(&meaning) {
                meanings.push(meaning);
            }
        }
        meanings
    }

    fn lookup(&self, word: &str) -> Vec<BinEntry> {
        self.entries_at(self.by_form.get(word)).cloned().collect()
    }

    fn lookup_forms(&self, lemma: &str, category: &Category) -> Vec<BinEntry> {
        self.entries_at(self.by_lemma.get(lemma))
            .filter(|e| &e.category == category)
            .cloned()
            .collect()
    }
}
