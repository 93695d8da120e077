pub mod bucket;
pub mod example;
pub mod filter;
pub mod frequency;
pub mod inflect;
pub mod lexicon;
pub mod settings;
