//! lh: claim search query compiler
//!
//! Turns a claim search request (free text plus optional facets) into the boolean query the
//! claim index is searched with, and prints it as an Elasticsearch search body.

#![warn(missing_docs)]

pub mod cli;
