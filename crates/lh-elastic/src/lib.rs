//! Elasticsearch output for lh query trees.
//!
//! Translates the engine-neutral [`QueryNode`](lh_query::QueryNode) tree into the
//! Elasticsearch query DSL as `serde_json` values.
//!
//! ```
//! use lh_config::ScoringSettings;
//! use lh_elastic::{ElasticCompiler, Page};
//! use lh_query::{SearchRequest, build_query};
//!
//! let compiler = ElasticCompiler::new(&ScoringSettings::default()).unwrap();
//! let tree = build_query(&SearchRequest::new("cats"));
//! let body = compiler.search_body(&tree, Page::new(0, 10));
//! assert_eq!(body["size"], 10);
//! assert!(body["query"]["bool"]["must"].is_array());
//! ```

#![warn(missing_docs)]

mod compile;
mod error;
mod functions;

pub use compile::{ElasticCompiler, Page};
pub use error::ElasticError;
pub use functions::{CONTROLLING_BID_STATE, FunctionParams, NOW, fields};
