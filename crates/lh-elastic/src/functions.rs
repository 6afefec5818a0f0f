//! Score function bodies.
//!
//! Each [`ScoreFunction`] expands into a `function_score` query with a single function whose
//! weight is taken from the tree node.

use chrono::{DateTime, SecondsFormat, Utc};
use lh_config::ScoringSettings;
use lh_query::ScoreFunction;
use serde_json::{Value, json};

use crate::ElasticError;

/// Document fields read by the score functions.
pub mod fields {
    /// Total amount staked on the claim.
    pub const EFFECTIVE_AMOUNT: &str = "effective_amount";
    /// Total amount staked on the claim's channel.
    pub const CERTIFICATE_AMOUNT: &str = "certificate_amount";
    /// Release timestamp of the claim.
    pub const RELEASE_TIME: &str = "release_time";
    /// Bid state of the claim.
    pub const BID_STATE: &str = "bid_state";
}

/// Bid state rewarded by the controlling-claim function.
pub const CONTROLLING_BID_STATE: &str = "Controlling";

/// Release decay origin meaning the time the engine runs the query.
pub const NOW: &str = "now";

/// Parameters shared by the score function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParams {
    /// Modifier applied to bid amounts.
    modifier: String,
    /// Factor applied to bid amounts.
    factor: f64,
    /// Release decay origin.
    origin: String,
    /// Release decay scale.
    scale: String,
    /// Release decay offset.
    offset: String,
    /// Release decay at `scale`.
    decay: f64,
}

impl FunctionParams {
    /// Builds parameters from scoring settings, validating a configured origin.
    pub fn from_settings(settings: &ScoringSettings) -> Result<Self, ElasticError> {
        let origin = match &settings.release_origin {
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|t| format_origin(t.with_timezone(&Utc)))
                .map_err(|source| ElasticError::InvalidOrigin {
                    value: value.clone(),
                    source,
                })?,
            None => NOW.to_string(),
        };

        Ok(Self {
            modifier: settings.amount_modifier.clone(),
            factor: settings.amount_factor,
            origin,
            scale: settings.release_scale.clone(),
            offset: settings.release_offset.clone(),
            decay: settings.release_decay,
        })
    }

    /// Fixes the release decay origin.
    pub fn set_origin(&mut self, origin: DateTime<Utc>) {
        self.origin = format_origin(origin);
    }

    /// Returns the release decay origin as emitted.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Builds the `function_score` query for `function` with `weight`.
    pub fn function_score(&self, function: ScoreFunction, weight: f64) -> Value {
        let mut body = self.function_body(function);
        if let Value::Object(map) = &mut body {
            map.insert("weight".to_string(), json!(weight));
        }
        json!({
            "function_score": {
                "functions": [body],
                "boost_mode": "replace",
            }
        })
    }

    /// Builds the function definition without its weight.
    fn function_body(&self, function: ScoreFunction) -> Value {
        match function {
            ScoreFunction::ClaimWeight => self.amount_factor(fields::EFFECTIVE_AMOUNT),
            ScoreFunction::ChannelWeight => self.amount_factor(fields::CERTIFICATE_AMOUNT),
            ScoreFunction::ReleaseTime => json!({
                "gauss": {
                    (fields::RELEASE_TIME): {
                        "origin": self.origin,
                        "scale": self.scale,
                        "offset": self.offset,
                        "decay": self.decay,
                    }
                }
            }),
            ScoreFunction::ControllingClaim => json!({
                "filter": {
                    "match": { (fields::BID_STATE): { "query": CONTROLLING_BID_STATE } }
                }
            }),
        }
    }

    /// Builds a `field_value_factor` over a bid amount field.
    fn amount_factor(&self, field: &str) -> Value {
        json!({
            "field_value_factor": {
                "field": field,
                "modifier": self.modifier,
                "factor": self.factor,
                "missing": 1,
            }
        })
    }
}

/// Formats an origin timestamp with second precision.
fn format_origin(origin: DateTime<Utc>) -> String {
    origin.to_rfc3339_opts(SecondsFormat::Secs, true)
}
