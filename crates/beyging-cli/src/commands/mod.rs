macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod generate_ops;
pub mod process_ops;

use std::path::Path;

use beyging_core::lexicon::BinLexicon;

pub fn open_lexicon(path: &Path) -> BinLexicon {
    eprintln!("Loading lexicon from {}...", path.display());
    let lexicon = die!(
        BinLexicon::open(path),
        "Error opening lexicon {}: {}",
        path.display()
    );
    eprintln!("  {} word forms", lexicon.len());
    lexicon
}
