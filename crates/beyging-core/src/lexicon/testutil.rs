use super::{BinEntry, BinLexicon, Category, Mark};

const CASE_NUMBER: [&str; 8] = [
    "NFET", "ÞFET", "ÞGFET", "EFET", "NFFT", "ÞFFT", "ÞGFFT", "EFFT",
];

pub(crate) fn entry(lemma: &str, id: u32, category: &str, form: &str, mark: &str) -> BinEntry {
    BinEntry {
        lemma: lemma.to_string(),
        id,
        category: Category::from_code(category),
        form: form.to_string(),
        mark: Mark::parse(mark),
    }
}

/// Noun paradigm in `CASE_NUMBER` order; empty strings are left out.
pub(crate) fn noun(lemma: &str, id: u32, gender: &str, forms: [&str; 8]) -> Vec<BinEntry> {
    CASE_NUMBER
        .iter()
        .zip(forms)
        .filter(|(_, form)| !form.is_empty())
        .map(|(mark, form)| entry(lemma, id, gender, form, mark))
        .collect()
}

/// Strong positive adjective paradigm for the three genders.
pub(crate) fn adjective(lemma: &str, id: u32, kk: [&str; 8], kvk: [&str; 8], hk: [&str; 8]) -> Vec<BinEntry> {
    let mut out = Vec::new();
    for (gender, forms) in [("KK", kk), ("KVK", kvk), ("HK", hk)] {
        for (cn, form) in CASE_NUMBER.iter().zip(forms) {
            out.push(entry(lemma, id, "lo", form, &format!("FSB-{gender}-{cn}")));
        }
    }
    out
}

pub(crate) fn sample_entries() -> Vec<BinEntry> {
    let mut e = Vec::new();
    e.extend(noun(
        "hestur",
        1,
        "kk",
        ["hestur", "hest", "hesti", "hests", "hestar", "hesta", "hestum", "hesta"],
    ));
    e.push(entry("hestur", 1, "kk", "hesturinn", "NFETgr"));
    e.extend(noun(
        "borg",
        2,
        "kvk",
        ["borg", "borg", "borg", "borgar", "borgir", "borgir", "borgum", "borga"],
    ));
    e.extend(noun(
        "hús",
        3,
        "hk",
        ["hús", "hús", "húsi", "húss", "hús", "hús", "húsum", "húsa"],
    ));
    e.extend(noun("gull", 4, "hk", ["gull", "gull", "gulli", "gulls", "", "", "", ""]));
    // Two meanings of the same headword.
    e.extend(noun("ver", 5, "kk", ["ver", "ver", "veri", "vers", "", "", "", ""]));
    e.extend(noun("ver", 6, "hk", ["ver", "ver", "veri", "vers", "ver", "ver", "verum", "vera"]));
    // Forms shared across two headwords.
    e.extend(noun(
        "lás",
        7,
        "kk",
        ["lás", "lás", "lási", "láss", "lásar", "lása", "lásum", "lása"],
    ));
    e.extend(noun("lási", 8, "kk", ["lási", "lása", "lása", "lása", "", "", "", ""]));
    e.extend(noun("Jón", 9, "kk", ["Jón", "Jón", "Jóni", "Jóns", "", "", "", ""]));

    e.extend(adjective(
        "góður",
        20,
        ["góður", "góðan", "góðum", "góðs", "góðir", "góða", "góðum", "góðra"],
        ["góð", "góða", "góðri", "góðrar", "góðar", "góðar", "góðum", "góðra"],
        ["gott", "gott", "góðu", "góðs", "góð", "góð", "góðum", "góðra"],
    ));
    e.push(entry("góður", 20, "lo", "góði", "FVB-KK-NFET"));
    e.extend(adjective(
        "rauður",
        21,
        ["rauður", "rauðan", "rauðum", "rauðs", "rauðir", "rauða", "rauðum", "rauðra"],
        ["rauð", "rauða", "rauðri", "rauðrar", "rauðar", "rauðar", "rauðum", "rauðra"],
        ["rautt", "rautt", "rauðu", "rauðs", "rauð", "rauð", "rauðum", "rauðra"],
    ));
    e.push(entry("fallegur", 22, "lo", "fallegur", "FSB-KK-NFET"));
    e.push(entry("gar", 23, "lo", "gar", "FSB-KK-NFET"));
    e
}

pub(crate) fn sample_lexicon() -> BinLexicon {
    BinLexicon::from_entries(sample_entries())
}
