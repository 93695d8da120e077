use std::fs;

use beyging_core::settings::{self, Settings};

pub fn export_config() {
    print!("{}", settings::default_toml());
}

/// Embedded defaults, or the validated TOML file at `path`.
pub fn load_settings(path: Option<&str>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
    die!(settings::parse_settings_toml(&content), "Error in {path}: {}")
}
