//! Tokenizer for body text and keyword phrases
//!
//! Text is split into maximal whitespace runs, maximal word-character runs,
//! and single characters that are neither. The same rule is applied to the
//! body text and to every keyword phrase, which is what lets multi-word
//! keywords be compared token by token.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<space>\s+)|(?P<word>\w+)|(?P<punct>[^\w\s])")
        .expect("token pattern is a valid regex")
});

/// Token classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of whitespace, newlines included
    Whitespace,
    /// A run of word characters (letters, digits, marks, underscore)
    Word,
    /// A single character that is neither whitespace nor a word character
    Punctuation,
}

/// An atomic slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The exact source characters
    pub text: &'a str,
    /// Byte offset of the token in its source
    pub start: usize,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Byte offset one past the end of the token
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Comparison key used by the matcher
    ///
    /// Lower-cased and trimmed, so every whitespace token normalizes to the
    /// empty string and compares equal to any other whitespace token.
    pub fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

/// Split `input` into tokens
///
/// Concatenating the `text` of every returned token reproduces `input`.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    TOKEN_PATTERN
        .captures_iter(input)
        .filter_map(|caps| {
            let (m, kind) = if let Some(m) = caps.name("space") {
                (m, TokenKind::Whitespace)
            } else if let Some(m) = caps.name("word") {
                (m, TokenKind::Word)
            } else {
                (caps.name("punct")?, TokenKind::Punctuation)
            };
            Some(Token {
                text: m.as_str(),
                start: m.start(),
                kind,
            })
        })
        .collect()
}

/// Normalized comparison keys for every token of `input`
pub fn normalized_tokens(input: &str) -> Vec<String> {
    tokenize(input).iter().map(Token::normalized).collect()
}
