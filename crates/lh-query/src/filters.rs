//! Non-scoring filters.
//!
//! Every filter is optional except the bid-state exclusion, which is always appended last.
//! Unrecognized media-type and claim-type tokens are logged and dropped. A media type that
//! was requested but produced no usable token yields [`QueryNode::MatchNone`] so that a
//! typo narrows the results to nothing instead of leaving them unfiltered.

use std::str::FromStr;

use log::debug;

use crate::{
    error::ValueError,
    node::{MatchMode, MatchNode, PrefixNode, QueryNode, TermsNode},
    phrase::exact_phrase_filter,
    request::SearchRequest,
    schema::Field,
};

/// Bid state excluded from every result set.
pub const EXCLUDED_BID_STATE: &str = "Accepted";

/// Content types treated as CAD files.
pub const CAD_CONTENT_TYPES: [&str; 2] = ["SKP", "simplify3d_stl"];

/// A requested media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `audio/*`
    Audio,
    /// `video/*`
    Video,
    /// `text/*`
    Text,
    /// `application/*`
    Application,
    /// `image/*`
    Image,
    /// CAD models, identified by a fixed list of content types.
    Cad,
}

impl MediaType {
    /// MIME top-level type, or `None` for CAD which matches by content type list.
    pub fn mime_prefix(self) -> Option<&'static str> {
        match self {
            Self::Audio => Some("audio/"),
            Self::Video => Some("video/"),
            Self::Text => Some("text/"),
            Self::Application => Some("application/"),
            Self::Image => Some("image/"),
            Self::Cad => None,
        }
    }

    /// Builds the filter clause for this media type.
    pub fn filter(self) -> QueryNode {
        match self.mime_prefix() {
            Some(prefix) => QueryNode::Prefix(PrefixNode {
                field: Field::ContentTypeKeyword,
                prefix: prefix.to_string(),
            }),
            None => QueryNode::Terms(TermsNode {
                field: Field::ContentTypeKeyword,
                values: CAD_CONTENT_TYPES.iter().map(|t| t.to_string()).collect(),
            }),
        }
    }
}

impl FromStr for MediaType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            "text" => Ok(Self::Text),
            "application" => Ok(Self::Application),
            "image" => Ok(Self::Image),
            "cad" => Ok(Self::Cad),
            other => Err(ValueError::UnknownMediaType(other.to_string())),
        }
    }
}

/// A requested claim type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimType {
    /// Channel claims.
    Channel,
    /// Content claims, indexed as streams.
    File,
}

impl ClaimType {
    /// Value stored in the `claim_type` field.
    pub fn indexed_value(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::File => "stream",
        }
    }
}

impl FromStr for ClaimType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channel" => Ok(Self::Channel),
            "file" => Ok(Self::File),
            other => Err(ValueError::UnknownClaimType(other.to_string())),
        }
    }
}

/// Excludes claims whose bid state is [`EXCLUDED_BID_STATE`].
pub fn bid_state_filter() -> QueryNode {
    QueryNode::not(QueryNode::Match(MatchNode::new(
        Field::BidState,
        EXCLUDED_BID_STATE,
        MatchMode::Exact,
    )))
}

/// Matches the NSFW flag exactly.
fn nsfw_filter(nsfw: Option<bool>) -> Option<QueryNode> {
    nsfw.map(|flag| QueryNode::Match(MatchNode::new(Field::Nsfw, flag, MatchMode::Exact)))
}

/// Accepts any of a comma-separated list of content types.
fn content_type_filter(content_type: Option<&str>) -> Option<QueryNode> {
    content_type.map(|list| {
        QueryNode::Terms(TermsNode {
            field: Field::ContentType,
            values: list.split(',').map(str::to_string).collect(),
        })
    })
}

/// Parses comma-separated media type tokens, dropping empty and unknown ones.
pub fn parse_media_types(list: &str) -> Vec<MediaType> {
    list.split(',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<MediaType>() {
            Ok(media_type) => Some(media_type),
            Err(err) => {
                debug!("dropping media type token: {err}");
                None
            }
        })
        .collect()
}

/// Accepts any of the requested media types, or nothing if none were usable.
fn media_type_filter(media_type: Option<&str>) -> Option<QueryNode> {
    let list = media_type?;
    let clauses: Vec<QueryNode> = parse_media_types(list)
        .into_iter()
        .map(MediaType::filter)
        .collect();

    if clauses.is_empty() {
        debug!("no usable media type in {list:?}; matching nothing");
        return Some(QueryNode::MatchNone);
    }
    Some(QueryNode::any(clauses))
}

/// Matches the indexed claim type. Unknown claim types produce no filter.
fn claim_type_filter(claim_type: Option<&str>) -> Option<QueryNode> {
    match claim_type?.parse::<ClaimType>() {
        Ok(t) => Some(QueryNode::Match(MatchNode::new(
            Field::ClaimType,
            t.indexed_value(),
            MatchMode::Exact,
        ))),
        Err(err) => {
            debug!("skipping claim type filter: {err}");
            None
        }
    }
}

/// Exact match of `value` on `field`.
fn exact_filter(field: Field, value: Option<&str>) -> Option<QueryNode> {
    value.map(|v| QueryNode::Match(MatchNode::new(field, v, MatchMode::Exact)))
}

/// Required pattern search on the channel name, using the raw channel text.
fn channel_filter(channel: Option<&str>) -> Option<QueryNode> {
    channel.map(|name| {
        QueryNode::all(vec![QueryNode::Match(MatchNode::new(
            Field::Channel,
            name,
            MatchMode::Pattern,
        ))])
    })
}

/// Builds every applicable filter for the request, ending with the bid-state exclusion.
pub fn filters(request: &SearchRequest) -> Vec<QueryNode> {
    let optional = [
        exact_phrase_filter(&request.s),
        nsfw_filter(request.nsfw),
        content_type_filter(request.content_type.as_deref()),
        media_type_filter(request.media_type.as_deref()),
        claim_type_filter(request.claim_type.as_deref()),
        exact_filter(Field::ChannelClaimId, request.channel_id.as_deref()),
        channel_filter(request.channel.as_deref()),
        exact_filter(Field::ClaimId, request.claim_id.as_deref()),
    ];

    let mut filters: Vec<QueryNode> = optional.into_iter().flatten().collect();
    filters.push(bid_state_filter());
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(p: &str) -> QueryNode {
        QueryNode::Prefix(PrefixNode {
            field: Field::ContentTypeKeyword,
            prefix: p.into(),
        })
    }

    #[test]
    fn bid_state_always_last() {
        let req = SearchRequest::new("x").with_nsfw(false).with_claim_id("abc");
        let f = filters(&req);
        assert_eq!(f.last(), Some(&bid_state_filter()));
    }

    #[test]
    fn bid_state_only_for_bare_request() {
        let f = filters(&SearchRequest::new("x"));
        assert_eq!(f, vec![bid_state_filter()]);
    }

    #[test]
    fn bid_state_excludes_accepted() {
        let filter = bid_state_filter();
        let b = filter.as_bool().unwrap();
        assert!(b.must.is_empty() && b.should.is_empty() && b.filter.is_empty());
        let m = b.must_not[0].as_match().unwrap();
        assert_eq!(m.field, Field::BidState);
        assert_eq!(m.value, "Accepted".into());
    }

    #[test]
    fn media_type_known_and_unknown() {
        let node = media_type_filter(Some("video,bogus")).unwrap();
        assert_eq!(node, QueryNode::any(vec![prefix("video/")]));
    }

    #[test]
    fn media_type_all_unknown_matches_nothing() {
        assert_eq!(media_type_filter(Some("bogus")), Some(QueryNode::MatchNone));
        assert_eq!(media_type_filter(Some("")), Some(QueryNode::MatchNone));
    }

    #[test]
    fn media_type_absent() {
        assert_eq!(media_type_filter(None), None);
    }

    #[test]
    fn media_type_cad_maps_to_terms() {
        let node = media_type_filter(Some("cad")).unwrap();
        assert_eq!(
            node,
            QueryNode::any(vec![QueryNode::Terms(TermsNode {
                field: Field::ContentTypeKeyword,
                values: vec!["SKP".into(), "simplify3d_stl".into()],
            })])
        );
    }

    #[test]
    fn media_type_multiple() {
        let node = media_type_filter(Some("audio,image")).unwrap();
        assert_eq!(node, QueryNode::any(vec![prefix("audio/"), prefix("image/")]));
    }

    #[test]
    fn media_types_are_case_sensitive() {
        assert!(parse_media_types("Video").is_empty());
    }

    #[test]
    fn claim_type_mapping() {
        let expect = |v: &str| {
            Some(QueryNode::Match(MatchNode::new(
                Field::ClaimType,
                v,
                MatchMode::Exact,
            )))
        };
        assert_eq!(claim_type_filter(Some("channel")), expect("channel"));
        assert_eq!(claim_type_filter(Some("file")), expect("stream"));
        assert_eq!(claim_type_filter(Some("other")), None);
        assert_eq!(claim_type_filter(None), None);
    }

    #[test]
    fn claim_type_parse_error() {
        assert_eq!(
            "repost".parse::<ClaimType>(),
            Err(ValueError::UnknownClaimType("repost".into()))
        );
    }

    #[test]
    fn content_type_split() {
        let node = content_type_filter(Some("video/mp4,audio/mpeg")).unwrap();
        assert_eq!(
            node,
            QueryNode::Terms(TermsNode {
                field: Field::ContentType,
                values: vec!["video/mp4".into(), "audio/mpeg".into()],
            })
        );
    }

    #[test]
    fn nsfw_matches_flag() {
        let node = nsfw_filter(Some(true)).unwrap();
        let m = node.as_match().unwrap();
        assert_eq!(m.field, Field::Nsfw);
        assert_eq!(m.value, true.into());
    }

    #[test]
    fn channel_uses_raw_pattern() {
        let node = channel_filter(Some("@some:chan")).unwrap();
        let b = node.as_bool().unwrap();
        assert_eq!(b.must.len(), 1);
        let m = b.must[0].as_match().unwrap();
        assert_eq!(m.field, Field::Channel);
        assert_eq!(m.mode, MatchMode::Pattern);
        assert_eq!(m.value, "@some:chan".into());
    }

    #[test]
    fn filter_order() {
        let req = SearchRequest::new(r#"foo "bar""#)
            .with_nsfw(false)
            .with_content_type("video/mp4")
            .with_media_type("video")
            .with_claim_type("file")
            .with_channel_id("cid")
            .with_channel("@chan")
            .with_claim_id("claim");
        let f = filters(&req);
        assert_eq!(f.len(), 9);
        assert!(matches!(&f[0], QueryNode::Bool(b) if b.should.len() == 4));
        assert_eq!(f[1].as_match().unwrap().field, Field::Nsfw);
        assert!(matches!(&f[2], QueryNode::Terms(t) if t.field == Field::ContentType));
        assert_eq!(f[3], QueryNode::any(vec![prefix("video/")]));
        assert_eq!(f[4].as_match().unwrap().field, Field::ClaimType);
        assert_eq!(f[5].as_match().unwrap().field, Field::ChannelClaimId);
        assert!(matches!(&f[6], QueryNode::Bool(b) if b.must.len() == 1));
        assert_eq!(f[7].as_match().unwrap().field, Field::ClaimId);
        assert_eq!(f[8], bid_state_filter());
    }
}
