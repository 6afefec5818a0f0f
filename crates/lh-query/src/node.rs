//! Query tree.
//!
//! Engine-neutral representation of an assembled query. Serializers translate it
//! into a concrete search engine's wire format.

use std::fmt;

use crate::{schema::Field, scoring::ScoreFunction};

/// A node of an assembled query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    /// Boolean composition of child nodes.
    Bool(BoolNode),
    /// Text or value match against a single field.
    Match(MatchNode),
    /// Field equals any of a set of values.
    Terms(TermsNode),
    /// Field value starts with a prefix.
    Prefix(PrefixNode),
    /// Reference to a score-adjustment function.
    ScoreFunction(ScoreFunctionNode),
    /// Matches no document.
    MatchNone,
}

/// Boolean composition slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolNode {
    /// Required matches that contribute to the score.
    pub must: Vec<QueryNode>,
    /// Optional matches that contribute to the score.
    pub should: Vec<QueryNode>,
    /// Required matches that do not contribute to the score.
    pub filter: Vec<QueryNode>,
    /// Required non-matches.
    pub must_not: Vec<QueryNode>,
}

/// How a [`MatchNode`] compares its value with the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Analyzed match of the value.
    Exact,
    /// Terms in order, adjacent.
    Phrase,
    /// Phrase whose last term may be a prefix.
    PhrasePrefix,
    /// Pattern search for the value anywhere in the field (`*value*`).
    Substring,
    /// Pattern search with the value used as the pattern.
    Pattern,
}

impl MatchMode {
    /// Short label used in tree output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Phrase => "phrase",
            Self::PhrasePrefix => "phrase-prefix",
            Self::Substring => "substring",
            Self::Pattern => "pattern",
        }
    }
}

/// The value a [`MatchNode`] compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchValue {
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
}

impl From<&str> for MatchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MatchValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for MatchValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Match against a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchNode {
    /// Field to match.
    pub field: Field,
    /// Value to compare.
    pub value: MatchValue,
    /// Comparison mode.
    pub mode: MatchMode,
    /// Score multiplier, if any.
    pub boost: Option<f64>,
    /// Query name reported back by the engine for matched clauses.
    pub name: Option<&'static str>,
}

impl MatchNode {
    /// Creates an unboosted, unnamed match.
    pub fn new(field: Field, value: impl Into<MatchValue>, mode: MatchMode) -> Self {
        Self {
            field,
            value: value.into(),
            mode,
            boost: None,
            name: None,
        }
    }

    /// Sets the boost.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Sets the query name.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }
}

/// Field equals any of the listed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsNode {
    /// Field to match.
    pub field: Field,
    /// Accepted values.
    pub values: Vec<String>,
}

/// Field value starts with a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixNode {
    /// Field to match.
    pub field: Field,
    /// Required prefix.
    pub prefix: String,
}

/// Reference to one of the score-adjustment functions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreFunctionNode {
    /// Which function to apply.
    pub function: ScoreFunction,
    /// Relative weight of the function's contribution.
    pub weight: f64,
}

impl QueryNode {
    /// Creates a boolean node whose only populated slot is `should`.
    pub fn any(nodes: Vec<Self>) -> Self {
        Self::Bool(BoolNode {
            should: nodes,
            ..BoolNode::default()
        })
    }

    /// Creates a boolean node whose only populated slot is `must`.
    pub fn all(nodes: Vec<Self>) -> Self {
        Self::Bool(BoolNode {
            must: nodes,
            ..BoolNode::default()
        })
    }

    /// Creates a boolean node excluding everything `node` matches.
    pub fn not(node: Self) -> Self {
        Self::Bool(BoolNode {
            must_not: vec![node],
            ..BoolNode::default()
        })
    }

    /// Returns the boolean slots if this is a boolean node.
    pub fn as_bool(&self) -> Option<&BoolNode> {
        match self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the match if this is a match node.
    pub fn as_match(&self) -> Option<&MatchNode> {
        match self {
            Self::Match(m) => Some(m),
            _ => None,
        }
    }

    /// Formats the node as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Bool(b) => {
                writeln!(f, "{prefix}Bool")?;
                let slots: [(&str, &[Self]); 4] = [
                    ("must", b.must.as_slice()),
                    ("should", b.should.as_slice()),
                    ("filter", b.filter.as_slice()),
                    ("must_not", b.must_not.as_slice()),
                ];
                for (slot, nodes) in slots {
                    if nodes.is_empty() {
                        continue;
                    }
                    writeln!(f, "{prefix}  {slot}:")?;
                    for node in nodes {
                        node.fmt_tree(f, indent + 2)?;
                    }
                }
                Ok(())
            }
            Self::Match(m) => {
                write!(f, "{prefix}Match({} {} {}", m.field, m.mode.label(), m.value)?;
                if let Some(boost) = m.boost {
                    write!(f, " ^{boost}")?;
                }
                if let Some(name) = m.name {
                    write!(f, " [{name}]")?;
                }
                writeln!(f, ")")
            }
            Self::Terms(t) => writeln!(f, "{prefix}Terms({} {:?})", t.field, t.values),
            Self::Prefix(p) => writeln!(f, "{prefix}Prefix({} {:?})", p.field, p.prefix),
            Self::ScoreFunction(s) => {
                writeln!(f, "{prefix}ScoreFunction({} x{})", s.function, s.weight)
            }
            Self::MatchNone => writeln!(f, "{prefix}MatchNone"),
        }
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
