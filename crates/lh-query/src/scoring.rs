//! Score-adjustment functions.
//!
//! Four functions reorder documents that already pass the required branches. They are
//! contributed as optional (`should`) clauses, so any subset may apply.

use std::fmt;

use crate::node::{QueryNode, ScoreFunctionNode};

/// A score-adjustment function, resolved to concrete engine parameters by a serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreFunction {
    /// Boost by the claim's effective bid amount.
    ClaimWeight,
    /// Boost by the owning channel's effective bid amount.
    ChannelWeight,
    /// Boost recent release times.
    ReleaseTime,
    /// Boost claims holding the controlling bid for their name.
    ControllingClaim,
}

impl ScoreFunction {
    /// All functions, in the order they are added to a query.
    pub const ALL: [Self; 4] = [
        Self::ClaimWeight,
        Self::ChannelWeight,
        Self::ReleaseTime,
        Self::ControllingClaim,
    ];

    /// Stable identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::ClaimWeight => "claim-weight",
            Self::ChannelWeight => "channel-weight",
            Self::ReleaseTime => "release-time",
            Self::ControllingClaim => "controlling-claim",
        }
    }
}

impl fmt::Display for ScoreFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Relative weight of each score function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Weight of [`ScoreFunction::ClaimWeight`].
    pub claim: f64,
    /// Weight of [`ScoreFunction::ChannelWeight`].
    pub channel: f64,
    /// Weight of [`ScoreFunction::ReleaseTime`].
    pub release_time: f64,
    /// Weight of [`ScoreFunction::ControllingClaim`].
    pub controlling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            claim: 1.0,
            channel: 1.0,
            release_time: 1.0,
            controlling: 20.0,
        }
    }
}

impl ScoringWeights {
    /// Returns the weight configured for `function`.
    pub fn weight(&self, function: ScoreFunction) -> f64 {
        match function {
            ScoreFunction::ClaimWeight => self.claim,
            ScoreFunction::ChannelWeight => self.channel,
            ScoreFunction::ReleaseTime => self.release_time,
            ScoreFunction::ControllingClaim => self.controlling,
        }
    }
}

/// Builds one score-function clause per function.
pub fn scoring_clauses(weights: &ScoringWeights) -> Vec<QueryNode> {
    ScoreFunction::ALL
        .into_iter()
        .map(|function| {
            QueryNode::ScoreFunction(ScoreFunctionNode {
                function,
                weight: weights.weight(function),
            })
        })
        .collect()
}
