//! Query compiler.
//!
//! Compiles an assembled query tree into the Elasticsearch query DSL.

use chrono::{DateTime, Utc};
use lh_config::ScoringSettings;
use lh_query::{BoolNode, MatchMode, MatchNode, MatchValue, QueryNode};
use log::trace;
use serde_json::{Map, Value, json};

use crate::{ElasticError, functions::FunctionParams};

/// A page of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Offset of the first result.
    pub from: usize,
    /// Number of results.
    pub size: usize,
}

impl Page {
    /// Creates a page starting at `from` holding `size` results.
    pub fn new(from: usize, size: usize) -> Self {
        Self { from, size }
    }
}

/// Compiles query trees into Elasticsearch query DSL.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticCompiler {
    /// Score function parameters.
    params: FunctionParams,
}

impl ElasticCompiler {
    /// Creates a compiler using the given scoring settings.
    pub fn new(settings: &ScoringSettings) -> Result<Self, ElasticError> {
        Ok(Self {
            params: FunctionParams::from_settings(settings)?,
        })
    }

    /// Fixes the release-time origin, making the output independent of the clock.
    pub fn with_origin(mut self, origin: DateTime<Utc>) -> Self {
        self.params.set_origin(origin);
        self
    }

    /// Returns the release-time origin as emitted.
    pub fn origin(&self) -> &str {
        self.params.origin()
    }

    /// Compiles a query tree.
    pub fn compile(&self, node: &QueryNode) -> Value {
        match node {
            QueryNode::Bool(b) => self.compile_bool(b),
            QueryNode::Match(m) => compile_match(m),
            QueryNode::Terms(t) => json!({ "terms": { (t.field.as_str()): t.values } }),
            QueryNode::Prefix(p) => json!({ "prefix": { (p.field.as_str()): p.prefix } }),
            QueryNode::ScoreFunction(f) => self.params.function_score(f.function, f.weight),
            QueryNode::MatchNone => json!({ "match_none": {} }),
        }
    }

    /// Compiles a query tree into a complete search body for a page of results.
    pub fn search_body(&self, node: &QueryNode, page: Page) -> Value {
        trace!("search body for page {page:?}");
        json!({
            "from": page.from,
            "size": page.size,
            "query": self.compile(node),
        })
    }

    /// Compiles a boolean node, omitting empty slots.
    fn compile_bool(&self, node: &BoolNode) -> Value {
        let slots = [
            ("must", &node.must),
            ("should", &node.should),
            ("filter", &node.filter),
            ("must_not", &node.must_not),
        ];

        let mut map = Map::new();
        for (slot, children) in slots {
            if children.is_empty() {
                continue;
            }
            let compiled = children.iter().map(|c| self.compile(c)).collect();
            map.insert(slot.to_string(), Value::Array(compiled));
        }

        json!({ "bool": map })
    }
}

/// Compiles a field match.
fn compile_match(node: &MatchNode) -> Value {
    let field = node.field.as_str();
    let (kind, mut body) = match node.mode {
        MatchMode::Exact => ("match", query_body(&node.value)),
        MatchMode::Phrase => ("match_phrase", query_body(&node.value)),
        MatchMode::PhrasePrefix => ("match_phrase_prefix", query_body(&node.value)),
        MatchMode::Substring => (
            "query_string",
            query_string_body(format!("*{}*", text(&node.value)), field),
        ),
        MatchMode::Pattern => (
            "query_string",
            query_string_body(text(&node.value), field),
        ),
    };

    if let Some(boost) = node.boost {
        body.insert("boost".to_string(), json!(boost));
    }
    if let Some(name) = node.name {
        body.insert("_name".to_string(), json!(name));
    }

    match node.mode {
        MatchMode::Substring | MatchMode::Pattern => json!({ kind: body }),
        MatchMode::Exact | MatchMode::Phrase | MatchMode::PhrasePrefix => {
            json!({ kind: { field: body } })
        }
    }
}

/// Builds the body of a `match` family query.
fn query_body(value: &MatchValue) -> Map<String, Value> {
    let query = match value {
        MatchValue::Text(s) => json!(s),
        MatchValue::Bool(b) => json!(b),
    };
    let mut map = Map::new();
    map.insert("query".to_string(), query);
    map
}

/// Builds the body of a `query_string` query restricted to one field.
fn query_string_body(query: String, field: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("query".to_string(), Value::String(query));
    map.insert("fields".to_string(), json!([field]));
    map
}

/// Renders a match value as pattern text.
fn text(value: &MatchValue) -> String {
    match value {
        MatchValue::Text(s) => s.clone(),
        MatchValue::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use lh_query::{Field, PrefixNode, TermsNode};

    use super::*;

    /// Compiler with default settings.
    fn compiler() -> ElasticCompiler {
        ElasticCompiler::new(&ScoringSettings::default()).unwrap()
    }

    #[test]
    fn exact_match_with_boost_and_name() {
        let node = QueryNode::Match(
            MatchNode::new(Field::Name, "alice", MatchMode::Exact)
                .boost(10.0)
                .named("name-match"),
        );
        assert_eq!(
            compiler().compile(&node),
            json!({
                "match": { "name": { "query": "alice", "boost": 10.0, "_name": "name-match" } }
            })
        );
    }

    #[test]
    fn phrase_kinds() {
        let phrase = QueryNode::Match(MatchNode::new(Field::Title, "a b", MatchMode::Phrase));
        let prefix = QueryNode::Match(MatchNode::new(
            Field::Description,
            "a b",
            MatchMode::PhrasePrefix,
        ));
        assert_eq!(
            compiler().compile(&phrase),
            json!({ "match_phrase": { "title": { "query": "a b" } } })
        );
        assert_eq!(
            compiler().compile(&prefix),
            json!({ "match_phrase_prefix": { "description": { "query": "a b" } } })
        );
    }

    #[test]
    fn substring_wraps_in_wildcards() {
        let node = QueryNode::Match(
            MatchNode::new(Field::Name, "cat", MatchMode::Substring)
                .boost(5.0)
                .named("name-contains"),
        );
        assert_eq!(
            compiler().compile(&node),
            json!({
                "query_string": {
                    "query": "*cat*",
                    "fields": ["name"],
                    "boost": 5.0,
                    "_name": "name-contains",
                }
            })
        );
    }

    #[test]
    fn pattern_is_verbatim() {
        let node = QueryNode::Match(MatchNode::new(Field::Channel, "@chan", MatchMode::Pattern));
        assert_eq!(
            compiler().compile(&node),
            json!({ "query_string": { "query": "@chan", "fields": ["channel"] } })
        );
    }

    #[test]
    fn bool_value_match() {
        let node = QueryNode::Match(MatchNode::new(Field::Nsfw, false, MatchMode::Exact));
        assert_eq!(
            compiler().compile(&node),
            json!({ "match": { "nsfw": { "query": false } } })
        );
    }

    #[test]
    fn empty_slots_omitted() {
        let node = QueryNode::not(QueryNode::MatchNone);
        assert_eq!(
            compiler().compile(&node),
            json!({ "bool": { "must_not": [{ "match_none": {} }] } })
        );
        assert_eq!(
            compiler().compile(&QueryNode::any(Vec::new())),
            json!({ "bool": {} })
        );
    }

    #[test]
    fn terms_and_prefix() {
        let terms = QueryNode::Terms(TermsNode {
            field: Field::ContentTypeKeyword,
            values: vec!["SKP".into(), "simplify3d_stl".into()],
        });
        let prefix = QueryNode::Prefix(PrefixNode {
            field: Field::ContentTypeKeyword,
            prefix: "video/".into(),
        });
        assert_eq!(
            compiler().compile(&terms),
            json!({ "terms": { "content_type.keyword": ["SKP", "simplify3d_stl"] } })
        );
        assert_eq!(
            compiler().compile(&prefix),
            json!({ "prefix": { "content_type.keyword": "video/" } })
        );
    }

    #[test]
    fn search_body_carries_page() {
        let body = compiler().search_body(&QueryNode::MatchNone, Page::new(20, 10));
        assert_eq!(
            body,
            json!({ "from": 20, "size": 10, "query": { "match_none": {} } })
        );
    }
}
