use crate::lexicon::{Category, Lexicon};

use super::{Case, CaseForms, InflectError, Number, PhraseInflector};

/// Declines `adjective* noun` phrases from lexicon paradigms.
///
/// The last word is the head noun, found among nominative noun entries in
/// the requested number. Each preceding word must be a nominative adjective
/// form agreeing with the head in gender and number; its declension (strong
/// or weak) and degree are kept in every case.
pub struct BinPhraseInflector<'a, L: Lexicon + ?Sized> {
    lexicon: &'a L,
}

struct Slot {
    lemma: String,
    category: Category,
    /// Tags fixed for all cases, e.g. `["FSB", "KK"]` for a strong
    /// masculine adjective.
    fixed: Vec<&'static str>,
}

impl<'a, L: Lexicon + ?Sized> BinPhraseInflector<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self { lexicon }
    }

    fn resolve_head(&self, word: &str, number: Number) -> Result<Slot, InflectError> {
        self.lexicon
            .lookup(word)
            .into_iter()
            .find(|e| e.category.is_noun() && e.mark.satisfies(&["NF", number.tag()]))
            .map(|e| Slot {
                lemma: e.lemma,
                category: e.category,
                fixed: Vec::new(),
            })
            .ok_or_else(|| InflectError::UnknownHead {
                word: word.to_string(),
                number: number.tag(),
            })
    }

    /// Resolve an attributive adjective. A form found under several
    /// declensions (indeclinable adjectives, `FSB` and `FVB` spelled alike)
    /// resolves to the first of `DECLENSIONS`, so the strong paradigm wins.
    fn resolve_modifier(
        &self,
        word: &str,
        gender: &'static str,
        number: Number,
    ) -> Result<Slot, InflectError> {
        let (declension, entry) = self
            .lexicon
            .lookup(word)
            .into_iter()
            .filter(|e| {
                e.category == Category::Adjective && e.mark.satisfies(&[gender, "NF", number.tag()])
            })
            .filter_map(|e| {
                let declension = e.mark.leading_tag().and_then(declension_tag)?;
                Some((declension, e))
            })
            .min_by_key(|(declension, _)| declension_rank(declension))
            .ok_or_else(|| InflectError::UnknownModifier {
                word: word.to_string(),
            })?;
        Ok(Slot {
            lemma: entry.lemma,
            category: entry.category,
            fixed: vec![declension, gender],
        })
    }

    fn render(&self, slot: &Slot, case: Case, number: Number) -> Result<String, InflectError> {
        let mut tags = slot.fixed.clone();
        tags.push(case.tag());
        tags.push(number.tag());
        self.lexicon
            .lookup_variants(&slot.lemma, &slot.category, &tags)
            .into_iter()
            .next()
            .map(|e| e.form)
            .ok_or_else(|| InflectError::MissingForm {
                lemma: slot.lemma.clone(),
                tags: tags.join("-"),
            })
    }
}

/// Declension/degree chunks that an attributive adjective keeps across
/// cases, in order of preference.
const DECLENSIONS: [&str; 5] = ["FSB", "FVB", "MST", "ESB", "EVB"];

fn declension_tag(tag: &str) -> Option<&'static str> {
    DECLENSIONS.into_iter().find(|known| *known == tag)
}

fn declension_rank(tag: &str) -> usize {
    DECLENSIONS
        .iter()
        .position(|known| *known == tag)
        .unwrap_or(DECLENSIONS.len())
}

impl<L: Lexicon + ?Sized> PhraseInflector for BinPhraseInflector<'_, L> {
    fn decline(&self, phrase: &str, number: Number) -> Result<CaseForms, InflectError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let Some((head, modifiers)) = words.split_last() else {
            return Err(InflectError::EmptyPhrase);
        };

        let head = self.resolve_head(head, number)?;
        let gender = head
            .category
            .gender_tag()
            .ok_or_else(|| InflectError::UnknownHead {
                word: phrase.to_string(),
                number: number.tag(),
            })?;

        let mut slots = modifiers
            .iter()
            .map(|word| self.resolve_modifier(word, gender, number))
            .collect::<Result<Vec<_>, _>>()?;
        slots.push(head);

        let mut forms = CaseForms::default();
        for case in Case::ALL {
            let words = slots
                .iter()
                .map(|slot| self.render(slot, case, number))
                .collect::<Result<Vec<_>, _>>()?;
            forms.set(case, words.join(" "));
        }
        Ok(forms)
    }
}
