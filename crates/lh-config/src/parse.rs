//! Configuration file parsing.
//!
//! Parses individual `.lh.toml` files into `RawConfig` structures whose fields stay
//! optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Scoring settings section.
    pub scoring: Option<RawScoringSettings>,
}

/// Raw `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSearchSettings {
    /// Index holding claim documents.
    pub index: Option<String>,
    /// Results per page.
    pub size: Option<usize>,
}

/// Raw `[scoring]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawScoringSettings {
    /// Weight of the claim effective-amount function.
    pub claim_weight: Option<f64>,
    /// Weight of the channel effective-amount function.
    pub channel_weight: Option<f64>,
    /// Weight of the release-time decay function.
    pub release_weight: Option<f64>,
    /// Weight of the controlling-claim function.
    pub controlling_weight: Option<f64>,
    /// Modifier applied to bid amounts.
    pub amount_modifier: Option<String>,
    /// Factor applied to bid amounts.
    pub amount_factor: Option<f64>,
    /// Distance from the origin at which the release score decays to `release_decay`.
    pub release_scale: Option<String>,
    /// Distance from the origin within which no decay applies.
    pub release_offset: Option<String>,
    /// Score at `release_scale` from the origin.
    pub release_decay: Option<f64>,
    /// Fixed RFC 3339 reference time for release decay.
    pub release_origin: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string. `path` is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks whether a config file sets `root = true`.
///
/// Unreadable or unparseable files are not root configs.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}
