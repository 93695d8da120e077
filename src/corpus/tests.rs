use std::fs;
use std::io::Cursor;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::testutil::{frequencies, lexicon, write};

#[test]
fn parse_noun_lines() {
    assert_eq!(
        parse_noun_line("hestur,kk"),
        Some(("hestur", Category::Masculine))
    );
    assert_eq!(parse_noun_line("  borg,kvk \n"), Some(("borg", Category::Feminine)));
    assert_eq!(parse_noun_line(""), None);
    assert_eq!(parse_noun_line("hestur"), None);
    assert_eq!(parse_noun_line("hestur,kk,extra"), None);
}

#[test]
fn parse_adjective_lines() {
    assert_eq!(parse_adjective_line("góður\n"), Some("góður"));
    assert_eq!(parse_adjective_line("   "), None);
    assert_eq!(parse_adjective_line("góður,lo"), None);
}

#[test]
fn nouns_are_filtered_and_bucketed() {
    let dir = tempfile::tempdir().unwrap();
    let lex = lexicon();
    let freq = frequencies();
    let settings = Settings::default();
    let processor = CorpusProcessor::new(&lex, &freq, &settings);
    let mut store = BucketBuilder::new("nouns", dir.path());

    let input = "hestur,kk\ngull,hk\nJón,kk\nver,kk\nver,hk\nbroken\n\nhestur,kvk\n";
    let stats = processor.process_nouns(Cursor::new(input), &mut store).unwrap();

    assert_eq!(stats.lines, 8);
    assert_eq!(stats.skipped_lines, 2);
    assert_eq!(stats.kept, 2);
    assert_eq!(stats.rejected["proper_noun"], 1);
    assert_eq!(stats.rejected["meaning_count"], 2);
    assert_eq!(stats.rejected["category_mismatch"], 1);
    assert_eq!(stats.rejected_total(), 4);

    // 150 + 30 occurrences over hestur's forms.
    assert!(store.lemmas(2).unwrap().contains("hestur"));
    assert!(store.lemmas(0).unwrap().contains("gull"));
    assert!(store.lemmas(1).is_none());
}

#[test]
fn adjectives_are_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let lex = lexicon();
    let freq = frequencies();
    let settings = Settings::default();
    let processor = CorpusProcessor::new(&lex, &freq, &settings);
    let mut store = BucketBuilder::new("adj", dir.path());

    let input = "góður\nfallegur\ngar\nhestur\n";
    let stats = processor.process_adjectives(Cursor::new(input), &mut store).unwrap();

    assert_eq!(stats.kept, 1);
    assert_eq!(stats.rejected["excluded_suffix"], 1);
    assert_eq!(stats.rejected["deny_listed"], 1);
    assert_eq!(stats.rejected["category_mismatch"], 1);
    assert_eq!(store.sizes(), vec![(0, 1)]);
}

#[test]
fn run_writes_bucket_files() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "nouns.csv", "hestur,kk\ngull,hk\nver,hk\n");
    write(dir.path(), "adjectives.csv", "góður\nfallegur\n");

    let lex = lexicon();
    let freq = frequencies();
    let settings = Settings::default();
    let processor = CorpusProcessor::new(&lex, &freq, &settings);
    let data = DataDir::new(dir.path());
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    processor.run_nouns(&data, &mut rng).unwrap();
    processor.run_adjectives(&data, &mut rng).unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("nouns-2.txt")).unwrap(), "hestur\n");
    assert_eq!(fs::read_to_string(dir.path().join("nouns-0.txt")).unwrap(), "gull\n");
    assert!(!dir.path().join("nouns-1.txt").exists());
    assert_eq!(fs::read_to_string(dir.path().join("adj-0.txt")).unwrap(), "góður\n");

    // Suffix-excluded adjectives never reach any bucket file.
    for bucket in 0..3 {
        let path = dir.path().join(format!("adj-{bucket}.txt"));
        if let Ok(content) = fs::read_to_string(path) {
            assert!(content.lines().all(|l| !l.ends_with("legur")));
        }
    }
}

#[test]
fn run_fails_without_input() {
    let dir = tempfile::tempdir().unwrap();
    let lex = lexicon();
    let freq = frequencies();
    let settings = Settings::default();
    let processor = CorpusProcessor::new(&lex, &freq, &settings);
    let err = processor
        .run_nouns(&DataDir::new(dir.path()), &mut ChaCha8Rng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)));
}
