//! Configuration system for lh.
//!
//! lh uses TOML configuration files named `.lh.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.lh.toml` files found,
//! then loading `~/.lh.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawScoringSettings, RawSearchSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use validate::{AMOUNT_MODIFIERS, ConfigWarning, is_duration};
use validate::validate_config;

/// Top-level merged configuration for lh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Search request settings.
    pub search: SearchSettings,
    /// Score function settings.
    pub scoring: ScoringSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.lh.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from config file paths given highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings in `.lh.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
            scoring: &self.scoring,
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::Serialize)
    }
}

/// Settings for the outgoing search request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Index holding claim documents.
    pub index: String,
    /// Results per page.
    pub size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            index: "claims".to_string(),
            size: 10,
        }
    }
}

/// Settings for the four score functions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Weight of the claim effective-amount function.
    pub claim_weight: f64,
    /// Weight of the channel effective-amount function.
    pub channel_weight: f64,
    /// Weight of the release-time decay function.
    pub release_weight: f64,
    /// Weight of the controlling-claim function.
    pub controlling_weight: f64,
    /// Modifier applied to bid amounts, one of [`AMOUNT_MODIFIERS`].
    pub amount_modifier: String,
    /// Factor applied to bid amounts.
    pub amount_factor: f64,
    /// Distance from the origin at which the release score reaches `release_decay`.
    pub release_scale: String,
    /// Distance from the origin within which releases are not penalised.
    pub release_offset: String,
    /// Score at `release_scale` from the origin.
    pub release_decay: f64,
    /// Fixed RFC 3339 origin for release decay. Unset means the current time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_origin: Option<String>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            claim_weight: 1.0,
            channel_weight: 1.0,
            release_weight: 1.0,
            controlling_weight: 20.0,
            amount_modifier: "log1p".to_string(),
            amount_factor: 1.0,
            release_scale: "30d".to_string(),
            release_offset: "7d".to_string(),
            release_decay: 0.5,
            release_origin: None,
        }
    }
}

/// Effective settings in the shape of a config file.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
    /// Scoring settings.
    scoring: &'a ScoringSettings,
}
