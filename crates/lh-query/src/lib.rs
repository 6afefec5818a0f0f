//! Query assembly for claim search.
//!
//! This crate turns a free-text content-discovery request into an engine-neutral boolean
//! query tree:
//!
//! - **Scoring**: claim weight, channel weight, release recency and controlling-claim
//!   functions reorder matching documents
//! - **Minimum match**: at least one name, title or description matcher must hold
//! - **Filters**: NSFW, content type, media type, claim type, channel and claim id narrow
//!   the results without scoring; claims in the `Accepted` bid state are always excluded
//!
//! # Example
//!
//! ```
//! use lh_query::{SearchRequest, build_query};
//!
//! let request = SearchRequest::new("@lbry").with_media_type("video");
//! let tree = build_query(&request);
//! assert_eq!(tree.as_bool().unwrap().should.len(), 4);
//! ```

#![warn(missing_docs)]

mod assemble;
mod error;
mod escape;
mod filters;
mod matchers;
mod node;
mod phrase;
mod request;
mod schema;
mod scoring;

pub use assemble::{QueryAssembler, build_query};
pub use error::ValueError;
pub use escape::escape;
pub use filters::{
    CAD_CONTENT_TYPES, ClaimType, EXCLUDED_BID_STATE, MediaType, bid_state_filter, filters,
    parse_media_types,
};
pub use matchers::text_matchers;
pub use node::{
    BoolNode, MatchMode, MatchNode, MatchValue, PrefixNode, QueryNode, ScoreFunctionNode,
    TermsNode,
};
pub use phrase::{exact_phrase_filter, trailing_phrases};
pub use request::SearchRequest;
pub use schema::{Field, boost};
pub use scoring::{ScoreFunction, ScoringWeights, scoring_clauses};
