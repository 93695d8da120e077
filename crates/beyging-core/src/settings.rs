//! Settings loaded from TOML.
//!
//! - Default values are embedded via `include_str!("default_settings.toml")`
//! - `parse_settings_toml` parses and validates a custom file
//! - `Settings::default()` returns the embedded defaults

use std::collections::BTreeSet;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Placeholder for the nominative singular phrase in `prompt.user_template`.
pub const PHRASE_PLACEHOLDER: &str = "{phrase}";

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub buckets: BucketSettings,
    pub filters: FilterSettings,
    pub generate: GenerateSettings,
    pub prompt: PromptSettings,
}

impl Default for Settings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketSettings {
    pub noun_samples: usize,
    pub adjective_samples: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    pub excluded_adjective_suffix: String,
    #[serde(default)]
    pub avoid_adjectives: BTreeSet<String>,
    #[serde(default)]
    pub avoid_nouns: BTreeSet<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSettings {
    pub count: usize,
    pub max_discarded_draws: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptSettings {
    pub system: String,
    pub user_template: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(buckets.noun_samples);
    check_positive_usize!(buckets.adjective_samples);
    check_positive_usize!(generate.count);

    if s.filters.excluded_adjective_suffix.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "filters.excluded_adjective_suffix".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if !s.prompt.user_template.contains(PHRASE_PLACEHOLDER) {
        return Err(SettingsError::InvalidValue {
            field: "prompt.user_template".to_string(),
            reason: format!("must contain {PHRASE_PLACEHOLDER}"),
        });
    }

    Ok(())
}
