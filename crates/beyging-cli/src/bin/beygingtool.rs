use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use beyging::data_dir::DataDir;
use beyging_cli::args::{Cli, Mode};
use beyging_cli::commands::{config_ops, generate_ops, process_ops};

fn main() {
    let cli = Cli::parse();

    let mode = cli.mode();
    if mode == Mode::ExportConfig {
        config_ops::export_config();
        return;
    }

    let _trace = beyging::init_tracing(cli.trace_dir.as_deref().map(Path::new));
    let settings = config_ops::load_settings(cli.config.as_deref());
    let data = DataDir::new(&cli.data_dir);
    let lexicon_path = cli
        .lexicon
        .map(PathBuf::from)
        .unwrap_or_else(|| data.lexicon());
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    match mode {
        Mode::Generate => {
            let count = cli.count.unwrap_or(settings.generate.count);
            generate_ops::generate(&data, &lexicon_path, &settings, count, &mut rng);
        }
        Mode::Process { nouns, adjectives } => {
            let frequencies_path = cli
                .frequencies
                .map(PathBuf::from)
                .unwrap_or_else(|| data.frequencies());
            process_ops::process(
                &data,
                &lexicon_path,
                &frequencies_path,
                &settings,
                nouns,
                adjectives,
                &mut rng,
            );
        }
        Mode::ExportConfig => {}
    }
}
