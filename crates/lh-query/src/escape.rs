//! Escaping of reserved pattern-syntax characters.

/// Characters reserved by the query-string syntax, escaped individually.
const RESERVED: &[char] = &[
    '+', '-', '=', '>', '<', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '/',
];

/// Characters reserved only when doubled (`&&`, `||`).
const RESERVED_PAIRS: &[char] = &['&', '|'];

/// Escapes reserved characters so `text` can be embedded in a pattern query.
///
/// The input is scanned once, left to right. `&&` and `||` are consumed as pairs and
/// rewritten as `\&\&` and `\|\|`; a lone `&` or `|` is left alone. Every other
/// character is copied unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if RESERVED_PAIRS.contains(&ch) && chars.peek() == Some(&ch) {
            chars.next();
            out.push('\\');
            out.push(ch);
            out.push('\\');
            out.push(ch);
        } else if RESERVED.contains(&ch) {
            out.push('\\');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn single_reserved_characters() {
        assert_eq!(escape("a+b"), "a\\+b");
        assert_eq!(escape("c:/path"), "c\\:\\/path");
        assert_eq!(escape("\"quoted\""), "\\\"quoted\\\"");
        assert_eq!(escape("why?"), "why\\?");
    }

    #[test]
    fn every_single_reserved_character() {
        for &ch in RESERVED {
            assert_eq!(escape(&ch.to_string()), format!("\\{ch}"));
        }
    }

    #[test]
    fn doubled_operators_escape_as_pairs() {
        assert_eq!(escape("a && b"), "a \\&\\& b");
        assert_eq!(escape("a || b"), "a \\|\\| b");
    }

    #[test]
    fn lone_ampersand_and_pipe_untouched() {
        assert_eq!(escape("rock & roll"), "rock & roll");
        assert_eq!(escape("a|b"), "a|b");
    }

    #[test]
    fn odd_run_leaves_trailing_single() {
        assert_eq!(escape("&&&"), "\\&\\&&");
        assert_eq!(escape("||||"), "\\|\\|\\|\\|");
    }

    #[test]
    fn backslash_is_not_reserved() {
        assert_eq!(escape("a\\b"), "a\\b");
    }

    #[test]
    fn multibyte_text_preserved() {
        assert_eq!(escape("café (día)"), "café \\(día\\)");
    }
}
