//! Query assembly.
//!
//! Composes scoring functions, text matchers and filters into a single boolean tree:
//!
//! - `should`: the four score functions
//! - `must`: one boolean node whose `should` holds every text matcher
//! - `filter`: the applicable filters, always ending with the bid-state exclusion

use log::debug;

use crate::{
    filters::filters,
    matchers::text_matchers,
    node::{BoolNode, QueryNode},
    request::SearchRequest,
    scoring::{ScoringWeights, scoring_clauses},
};

/// Assembles search requests into query trees.
#[derive(Debug, Clone, Default)]
pub struct QueryAssembler {
    /// Weights of the score functions.
    weights: ScoringWeights,
}

impl QueryAssembler {
    /// Creates an assembler with the given score function weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Returns the score function weights.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Assembles the query tree for a request.
    ///
    /// Every call builds a fresh tree; identical requests yield identical trees.
    pub fn assemble(&self, request: &SearchRequest) -> QueryNode {
        let minimum = QueryNode::any(text_matchers(&request.s));
        let root = BoolNode {
            should: scoring_clauses(&self.weights),
            must: vec![minimum],
            filter: filters(request),
            must_not: Vec::new(),
        };

        debug!(
            "assembled query for {:?}: {} score functions, {} filters",
            request.s,
            root.should.len(),
            root.filter.len()
        );

        QueryNode::Bool(root)
    }
}

/// Assembles a request with the default score function weights.
pub fn build_query(request: &SearchRequest) -> QueryNode {
    QueryAssembler::default().assemble(request)
}
