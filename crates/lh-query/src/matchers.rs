//! Text matchers for the minimum-match branch.
//!
//! Each matcher targets one field with a fixed boost (see [`crate::schema::boost`]).
//! Pattern-style matchers (substring, phrase and phrase-prefix on title and description)
//! receive the escaped text; analyzed matches and name phrases receive the raw text.
//! Queries starting with `@` look like channel names and escalate the name boosts.

use crate::{
    escape::escape,
    node::{MatchMode, MatchNode, QueryNode},
    schema::{Field, boost},
};

/// Returns true when the text looks like a channel name. Empty text never does.
fn is_channel_query(raw: &str) -> bool {
    raw.starts_with('@')
}

/// Wraps a match as a tree node.
fn node(m: MatchNode) -> QueryNode {
    QueryNode::Match(m)
}

/// Phrase match on the claim name.
fn name_phrase(raw: &str) -> QueryNode {
    let mut weight = boost::NAME_PHRASE;
    if is_channel_query(raw) {
        weight *= boost::CHANNEL_ESCALATION;
    }
    node(
        MatchNode::new(Field::Name, raw, MatchMode::Phrase)
            .named("name-match-phrase")
            .boost(weight),
    )
}

/// Exact match on the claim name, escalated twice for channel queries.
fn name_exact(raw: &str) -> QueryNode {
    if is_channel_query(raw) {
        let weight = boost::NAME_EXACT * boost::CHANNEL_ESCALATION * boost::CHANNEL_ESCALATION;
        return node(
            MatchNode::new(Field::Name, raw, MatchMode::Exact)
                .named("name-match-@boost")
                .boost(weight),
        );
    }
    node(
        MatchNode::new(Field::Name, raw, MatchMode::Exact)
            .named("name-match")
            .boost(boost::NAME_EXACT),
    )
}

/// Match on the `@`-prefixed name with spaces removed.
fn name_compressed(raw: &str) -> QueryNode {
    let compressed = format!("@{}", raw.replace(' ', ""));
    node(
        MatchNode::new(Field::Name, compressed, MatchMode::Exact)
            .named("name-match-@compressed")
            .boost(boost::NAME_COMPRESSED),
    )
}

/// Query names for the four title or description matchers.
struct TextNames {
    /// Substring clause name.
    contains: &'static str,
    /// Exact clause name.
    exact: &'static str,
    /// Phrase-prefix clause name.
    phrase_prefix: &'static str,
    /// Phrase clause name.
    phrase: &'static str,
}

/// Clause names for the title field.
const TITLE_NAMES: TextNames = TextNames {
    contains: "title-contains",
    exact: "title-match",
    phrase_prefix: "title-match-phrase-prefix",
    phrase: "title-match-phrase",
};

/// Clause names for the description field.
const DESCRIPTION_NAMES: TextNames = TextNames {
    contains: "description-contains",
    exact: "description-match",
    phrase_prefix: "description-match-phrase-prefix",
    phrase: "description-match-phrase",
};

/// Substring, exact, phrase-prefix and phrase matches on a free-text field.
fn text_field(field: Field, names: &TextNames, raw: &str, escaped: &str) -> [QueryNode; 4] {
    [
        node(
            MatchNode::new(field, escaped, MatchMode::Substring)
                .named(names.contains)
                .boost(boost::TEXT_CONTAINS),
        ),
        node(
            MatchNode::new(field, raw, MatchMode::Exact)
                .named(names.exact)
                .boost(boost::TEXT_EXACT),
        ),
        node(
            MatchNode::new(field, escaped, MatchMode::PhrasePrefix)
                .named(names.phrase_prefix)
                .boost(boost::TEXT_PHRASE_PREFIX),
        ),
        node(
            MatchNode::new(field, escaped, MatchMode::Phrase)
                .named(names.phrase)
                .boost(boost::TEXT_PHRASE),
        ),
    ]
}

/// Builds the full matcher set for the raw query text.
///
/// At least one of these must match for a document to be eligible.
pub fn text_matchers(raw: &str) -> Vec<QueryNode> {
    let escaped = escape(raw);

    let mut matchers = Vec::with_capacity(12);
    matchers.push(name_phrase(raw));
    matchers.push(name_exact(raw));
    matchers.push(node(
        MatchNode::new(Field::Name, escaped.as_str(), MatchMode::Substring)
            .named("name-contains")
            .boost(boost::NAME_CONTAINS),
    ));
    matchers.extend(text_field(Field::Title, &TITLE_NAMES, raw, &escaped));
    matchers.extend(text_field(Field::Description, &DESCRIPTION_NAMES, raw, &escaped));
    matchers.push(name_compressed(raw));
    matchers
}
