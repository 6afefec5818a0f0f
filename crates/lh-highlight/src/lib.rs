//! Syntax highlighting and terminal styling for lh.
//!
//! Compiled queries are printed as JSON and effective configuration as TOML. Both are
//! highlighted when written to a terminal and left untouched otherwise, so piped output
//! stays machine readable.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// ANSI escape sequences.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text.
    pub const RED: &str = "\x1b[31m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Highlights structured output for the terminal.
pub struct Highlighter {
    /// Language definitions, including JSON and TOML.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme used for highlighting.
    theme: EmbeddedThemeName,
    /// Whether escape sequences are emitted at all.
    enabled: bool,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Highlighter {
    /// Creates a highlighter. When `enabled` is false every method returns its input as is.
    pub fn new(enabled: bool) -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
            enabled,
        }
    }

    /// Returns whether output is styled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Highlights a JSON document.
    pub fn highlight_json(&self, content: &str) -> String {
        self.highlight(content, "json")
    }

    /// Highlights a TOML document.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights `content` as the syntax with the given extension or name.
    ///
    /// Unknown syntaxes are highlighted as plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        if !self.enabled {
            return content.to_string();
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }

    /// Wraps `text` in the given escape codes when styling is enabled.
    fn paint(&self, codes: &[&str], text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}{text}{}", codes.concat(), colors::RESET)
    }

    /// Formats a section header.
    pub fn header(&self, text: &str) -> String {
        self.paint(&[colors::BOLD, colors::CYAN], text)
    }

    /// Formats secondary information.
    pub fn dim(&self, text: &str) -> String {
        self.paint(&[colors::DIM], text)
    }

    /// Formats a success message.
    pub fn success(&self, text: &str) -> String {
        self.paint(&[colors::GREEN], text)
    }

    /// Formats a warning.
    pub fn warning(&self, text: &str) -> String {
        self.paint(&[colors::YELLOW], text)
    }

    /// Formats an error.
    pub fn error(&self, text: &str) -> String {
        self.paint(&[colors::BOLD, colors::RED], text)
    }
}
