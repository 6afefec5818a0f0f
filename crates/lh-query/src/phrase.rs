//! Exact-phrase extraction.
//!
//! A double-quoted run at the very end of the query text (`foo "bar baz"`) is treated as
//! a phrase that must appear verbatim in one of the claim's text fields. Quoted runs
//! elsewhere in the text are not extracted.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

use crate::{
    node::{MatchMode, MatchNode, QueryNode},
    schema::Field,
};

/// Pattern for a quoted run anchored at end of input.
const TRAILING_PHRASE_PATTERN: &str = r#""([^"]*)"$"#;

/// Compiled trailing-phrase pattern, or the error from compiling it.
static TRAILING_PHRASE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(TRAILING_PHRASE_PATTERN));

/// Fields searched for an exact phrase, with the query name of each clause.
const EXACT_FIELDS: [(Field, &str); 4] = [
    (Field::Channel, "channel-exact"),
    (Field::Name, "name-exact"),
    (Field::Title, "title-exact"),
    (Field::Description, "description-exact"),
];

/// Returns the contents of quoted runs that end the input.
///
/// If the pattern cannot be built the failure is logged and no phrases are returned.
pub fn trailing_phrases(text: &str) -> Vec<String> {
    match TRAILING_PHRASE.as_ref() {
        Ok(regex) => extract(regex, text),
        Err(err) => {
            error!("exact phrase pattern failed to compile: {err}");
            Vec::new()
        }
    }
}

/// Collects the first capture group of every match.
fn extract(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Builds the exact-phrase filter for `text`.
///
/// Each trailing phrase becomes four phrase matches (channel, name, title, description)
/// joined with OR. Returns `None` when the text does not end with a quoted run.
pub fn exact_phrase_filter(text: &str) -> Option<QueryNode> {
    let phrases = trailing_phrases(text);
    if phrases.is_empty() {
        return None;
    }

    let clauses = phrases
        .iter()
        .flat_map(|phrase| {
            EXACT_FIELDS.iter().map(move |&(field, name)| {
                QueryNode::Match(
                    MatchNode::new(field, phrase.as_str(), MatchMode::Phrase).named(name),
                )
            })
        })
        .collect();

    Some(QueryNode::any(clauses))
}
