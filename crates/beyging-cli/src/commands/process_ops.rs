use std::path::Path;

use rand::Rng;

use beyging::corpus::{CorpusProcessor, ProcessStats};
use beyging::data_dir::DataDir;
use beyging_core::frequency::UnigramCounts;
use beyging_core::settings::Settings;

use super::open_lexicon;

/// Bucket the noun and/or adjective lemma lists.
pub fn process(
    data: &DataDir,
    lexicon_path: &Path,
    frequencies_path: &Path,
    settings: &Settings,
    nouns: bool,
    adjectives: bool,
    rng: &mut impl Rng,
) {
    let lexicon = open_lexicon(lexicon_path);
    let frequencies = die!(
        UnigramCounts::open(frequencies_path),
        "Error opening frequencies {}: {}",
        frequencies_path.display()
    );
    let processor = CorpusProcessor::new(&lexicon, &frequencies, settings);

    if nouns {
        eprintln!("Processing {}...", data.nouns_csv().display());
        let stats = die!(processor.run_nouns(data, rng), "Error processing nouns: {}");
        report("nouns", &stats);
    }
    if adjectives {
        eprintln!("Processing {}...", data.adjectives_csv().display());
        let stats = die!(
            processor.run_adjectives(data, rng),
            "Error processing adjectives: {}"
        );
        report("adjectives", &stats);
    }
}

fn report(label: &str, stats: &ProcessStats) {
    eprintln!(
        "  {label}: kept {} of {} lines ({} rejected, {} skipped)",
        stats.kept,
        stats.lines,
        stats.rejected_total(),
        stats.skipped_lines
    );
    for (reason, count) in &stats.rejected {
        eprintln!("    {reason}: {count}");
    }
}
