use std::path::Path;

use rand::Rng;

use beyging::data_dir::DataDir;
use beyging::generate::Generator;
use beyging_core::inflect::BinPhraseInflector;
use beyging_core::settings::Settings;

use super::open_lexicon;

/// Write `count` examples per difficulty from the persisted buckets.
pub fn generate(
    data: &DataDir,
    lexicon_path: &Path,
    settings: &Settings,
    count: usize,
    rng: &mut impl Rng,
) {
    let lexicon = open_lexicon(lexicon_path);
    let inflector = BinPhraseInflector::new(&lexicon);
    let generator = Generator::new(&lexicon, &inflector, settings);

    let paths = die!(
        generator.run(data, count, rng),
        "Error generating examples: {}"
    );
    for path in paths {
        eprintln!("Wrote {}", path.display());
    }
}
