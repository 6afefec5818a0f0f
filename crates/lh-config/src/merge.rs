//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single `Config`. For every setting the first
//! file that defines it wins.

use std::path::PathBuf;

use crate::{
    Config, ScoringSettings, SearchSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawScoringSettings, RawSearchSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files given highest precedence first.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut search = SearchSettings::default();
    let mut scoring = ScoringSettings::default();

    // Lowest precedence first so that nearer files overwrite
    for parsed in configs.iter().rev() {
        if let Some(raw) = &parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
        if let Some(raw) = &parsed.config.scoring {
            apply_raw_scoring(&mut scoring, raw);
        }
    }

    let config_root = configs
        .iter()
        .find(|c| !is_global_config(&c.path))
        .and_then(|c| c.path.parent())
        .map(PathBuf::from);

    Config {
        search,
        scoring,
        config_root,
    }
}

/// Applies raw search settings to `result`, overwriting any present values.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = &raw.index {
        result.index.clone_from(v);
    }
    if let Some(v) = raw.size {
        result.size = v;
    }
}

/// Applies raw scoring settings to `result`, overwriting any present values.
fn apply_raw_scoring(result: &mut ScoringSettings, raw: &RawScoringSettings) {
    let weights = [
        (raw.claim_weight, &mut result.claim_weight),
        (raw.channel_weight, &mut result.channel_weight),
        (raw.release_weight, &mut result.release_weight),
        (raw.controlling_weight, &mut result.controlling_weight),
        (raw.amount_factor, &mut result.amount_factor),
        (raw.release_decay, &mut result.release_decay),
    ];
    for (value, slot) in weights {
        if let Some(v) = value {
            *slot = v;
        }
    }

    let strings = [
        (&raw.amount_modifier, &mut result.amount_modifier),
        (&raw.release_scale, &mut result.release_scale),
        (&raw.release_offset, &mut result.release_offset),
    ];
    for (value, slot) in strings {
        if let Some(v) = value {
            slot.clone_from(v);
        }
    }

    if raw.release_origin.is_some() {
        result.release_origin.clone_from(&raw.release_origin);
    }
}
