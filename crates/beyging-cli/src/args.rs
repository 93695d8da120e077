//! Command-line surface of `beygingtool`.

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "beygingtool",
    about = "Icelandic noun-phrase inflection evaluation data generator"
)]
#[command(group(ArgGroup::new("mode").args(["nouns", "adjectives", "generate", "export_config"])))]
pub struct Cli {
    /// Bucket noun lemmas only
    #[arg(long)]
    pub nouns: bool,
    /// Bucket adjective lemmas only
    #[arg(long)]
    pub adjectives: bool,
    /// Generate the JSONL example files from the buckets
    #[arg(long)]
    pub generate: bool,
    /// Print the default settings TOML and exit
    #[arg(long)]
    pub export_config: bool,
    /// Examples per difficulty (default from settings)
    #[arg(long)]
    pub count: Option<usize>,
    /// Directory with inputs, bucket files and outputs
    #[arg(long, default_value = "data")]
    pub data_dir: String,
    /// BÍN CSV export (default: <data-dir>/SHsnid.csv)
    #[arg(long)]
    pub lexicon: Option<String>,
    /// Unigram counts, `word count` per line (default: <data-dir>/unigrams.tsv)
    #[arg(long)]
    pub frequencies: Option<String>,
    /// Settings TOML file
    #[arg(long)]
    pub config: Option<String>,
    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long)]
    pub trace_dir: Option<String>,
}

/// What a single run does. The mode flags exclude each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ExportConfig,
    Generate,
    Process { nouns: bool, adjectives: bool },
}

impl Cli {
    /// No mode flag runs both processors, nouns first.
    pub fn mode(&self) -> Mode {
        if self.export_config {
            Mode::ExportConfig
        } else if self.generate {
            Mode::Generate
        } else if !self.nouns && !self.adjectives {
            Mode::Process {
                nouns: true,
                adjectives: true,
            }
        } else {
            Mode::Process {
                nouns: self.nouns,
                adjectives: self.adjectives,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("beygingtool").chain(args.iter().copied()))
    }

    #[test]
    fn no_flag_processes_both() {
        let cli = parse(&[]).unwrap();
        assert_eq!(
            cli.mode(),
            Mode::Process {
                nouns: true,
                adjectives: true
            }
        );
        assert_eq!(cli.data_dir, "data");
    }

    #[test]
    fn single_mode_flags() {
        assert_eq!(
            parse(&["--nouns"]).unwrap().mode(),
            Mode::Process {
                nouns: true,
                adjectives: false
            }
        );
        assert_eq!(
            parse(&["--adjectives"]).unwrap().mode(),
            Mode::Process {
                nouns: false,
                adjectives: true
            }
        );
        assert_eq!(
            parse(&["--generate", "--count", "5"]).unwrap().mode(),
            Mode::Generate
        );
        assert_eq!(parse(&["--export-config"]).unwrap().mode(), Mode::ExportConfig);
    }

    #[test]
    fn mode_flags_conflict() {
        for args in [
            ["--nouns", "--generate"],
            ["--nouns", "--adjectives"],
            ["--generate", "--export-config"],
        ] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict, "{args:?}");
        }
    }
}
