//! Indexed claim fields referenced by assembled queries.
//!
//! Field names must match the claims index mapping exactly:
//! - `name`, `title`, `description`, `channel`: analyzed text, searched by the matchers
//! - `content_type`, `content_type.keyword`: MIME type and its keyword sub-field
//! - `claim_type`, `bid_state`, `nsfw`: claim attributes used as filters
//! - `channel_claim_id`, `claimId`: identifiers matched exactly

use std::fmt;

/// Relative boosts for the text matchers.
pub mod boost {
    /// Phrase match on the claim name.
    pub const NAME_PHRASE: f64 = 2.0;
    /// Exact match on the claim name.
    pub const NAME_EXACT: f64 = 10.0;
    /// Substring match on the claim name.
    pub const NAME_CONTAINS: f64 = 5.0;
    /// Match on the `@`-prefixed name with spaces removed.
    pub const NAME_COMPRESSED: f64 = 15.0;
    /// Multiplier applied to name boosts when the query starts with `@`.
    pub const CHANNEL_ESCALATION: f64 = 10.0;
    /// Substring match on title or description.
    pub const TEXT_CONTAINS: f64 = 1.0;
    /// Exact match on title or description.
    pub const TEXT_EXACT: f64 = 3.0;
    /// Phrase-prefix match on title or description.
    pub const TEXT_PHRASE_PREFIX: f64 = 2.0;
    /// Phrase match on title or description.
    pub const TEXT_PHRASE: f64 = 2.0;
}

/// A field of the claims index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Claim name.
    Name,
    /// Claim title.
    Title,
    /// Claim description.
    Description,
    /// Name of the owning channel.
    Channel,
    /// MIME content type (analyzed).
    ContentType,
    /// MIME content type (keyword sub-field).
    ContentTypeKeyword,
    /// Claim type (`stream` or `channel`).
    ClaimType,
    /// Lifecycle state of the claim's bid.
    BidState,
    /// Mature-content flag.
    Nsfw,
    /// Claim id of the owning channel.
    ChannelClaimId,
    /// Claim id.
    ClaimId,
}

impl Field {
    /// Returns the field name as it appears in the index mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Description => "description",
            Self::Channel => "channel",
            Self::ContentType => "content_type",
            Self::ContentTypeKeyword => "content_type.keyword",
            Self::ClaimType => "claim_type",
            Self::BidState => "bid_state",
            Self::Nsfw => "nsfw",
            Self::ChannelClaimId => "channel_claim_id",
            Self::ClaimId => "claimId",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
