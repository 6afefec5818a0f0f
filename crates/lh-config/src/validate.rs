//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for settings the search backend
//! would reject or that make scoring meaningless.

use std::fmt;

use chrono::DateTime;

use crate::{Config, ScoringSettings};

/// Modifiers accepted for bid amounts.
pub const AMOUNT_MODIFIERS: &[&str] = &[
    "none",
    "log",
    "log1p",
    "log2p",
    "ln",
    "ln1p",
    "ln2p",
    "square",
    "sqrt",
    "reciprocal",
];

/// Duration units accepted in release settings.
const DURATION_UNITS: &[&str] = &["ms", "s", "m", "h", "d"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The page size is zero.
    ZeroPageSize,
    /// A score function weight is negative.
    NegativeWeight {
        /// Name of the setting.
        setting: &'static str,
        /// Configured value.
        value: f64,
    },
    /// A score function weight or factor is NaN or infinite.
    NonFiniteWeight {
        /// Name of the setting.
        setting: &'static str,
        /// Configured value.
        value: f64,
    },
    /// The release decay lies outside the open interval (0, 1).
    DecayOutOfRange(f64),
    /// The amount modifier is not recognised.
    UnknownModifier(String),
    /// A release distance is not a duration such as `30d`.
    InvalidDuration {
        /// Name of the setting.
        setting: &'static str,
        /// Configured value.
        value: String,
    },
    /// The release origin is not an RFC 3339 timestamp.
    InvalidOrigin(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPageSize => write!(f, "search size is 0; every page will be empty"),
            Self::NegativeWeight { setting, value } => {
                write!(f, "scoring {setting} is negative: {value}")
            }
            Self::NonFiniteWeight { setting, value } => {
                write!(f, "scoring {setting} must be a finite number: {value}")
            }
            Self::DecayOutOfRange(v) => {
                write!(f, "scoring release_decay must be between 0 and 1 exclusive: {v}")
            }
            Self::UnknownModifier(m) => {
                write!(
                    f,
                    "unknown amount_modifier '{m}', expected one of: {}",
                    AMOUNT_MODIFIERS.join(", ")
                )
            }
            Self::InvalidDuration { setting, value } => {
                write!(f, "scoring {setting} is not a duration: '{value}'")
            }
            Self::InvalidOrigin(v) => {
                write!(f, "scoring release_origin is not an RFC 3339 timestamp: '{v}'")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.search.size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize);
    }
    warnings.extend(validate_scoring(&config.scoring));

    warnings
}

/// Validates the score function settings.
fn validate_scoring(scoring: &ScoringSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let weights = [
        ("claim_weight", scoring.claim_weight),
        ("channel_weight", scoring.channel_weight),
        ("release_weight", scoring.release_weight),
        ("controlling_weight", scoring.controlling_weight),
        ("amount_factor", scoring.amount_factor),
    ];
    for (setting, value) in weights {
        if !value.is_finite() {
            warnings.push(ConfigWarning::NonFiniteWeight { setting, value });
        } else if value < 0.0 {
            warnings.push(ConfigWarning::NegativeWeight { setting, value });
        }
    }

    if !(scoring.release_decay > 0.0 && scoring.release_decay < 1.0) {
        warnings.push(ConfigWarning::DecayOutOfRange(scoring.release_decay));
    }

    if !AMOUNT_MODIFIERS.contains(&scoring.amount_modifier.as_str()) {
        warnings.push(ConfigWarning::UnknownModifier(
            scoring.amount_modifier.clone(),
        ));
    }

    let durations = [
        ("release_scale", &scoring.release_scale),
        ("release_offset", &scoring.release_offset),
    ];
    for (setting, value) in durations {
        if !is_duration(value) {
            warnings.push(ConfigWarning::InvalidDuration {
                setting,
                value: value.clone(),
            });
        }
    }

    if let Some(origin) = &scoring.release_origin
        && DateTime::parse_from_rfc3339(origin).is_err()
    {
        warnings.push(ConfigWarning::InvalidOrigin(origin.clone()));
    }

    warnings
}

/// Checks whether `value` is a whole number followed by a duration unit, like `30d`.
pub fn is_duration(value: &str) -> bool {
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    !digits.is_empty() && DURATION_UNITS.contains(&unit)
}
