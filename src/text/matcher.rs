//! Keyword matching over a token stream
//!
//! The matcher walks the source tokens left to right. At each position it
//! tries every catalog entry in declaration order and takes the first one
//! whose tokens equal the next source tokens. There is no longest-match
//! preference: declaration order alone decides.

use std::ops::Range;

use super::keyword::{Catalog, Keyword};
use super::tokens::{normalized_tokens, Token};

/// Outcome for one group of source tokens
#[derive(Debug, Clone)]
pub enum MatchResult<'k> {
    /// A keyword matched starting at `tokens.start`
    Keyword {
        keyword: &'k Keyword,
        /// Position of the keyword in its catalog
        index: usize,
        /// Source token indices consumed by the match
        tokens: Range<usize>,
    },
    /// A single unmatched source token
    Plain { token: usize },
}

impl<'k> MatchResult<'k> {
    /// Source token indices covered by this result
    pub fn token_range(&self) -> Range<usize> {
        match self {
            MatchResult::Keyword { tokens, .. } => tokens.clone(),
            MatchResult::Plain { token } => *token..*token + 1,
        }
    }

    pub fn keyword(&self) -> Option<&'k Keyword> {
        match self {
            MatchResult::Keyword { keyword, .. } => Some(*keyword),
            MatchResult::Plain { .. } => None,
        }
    }

    pub fn keyword_index(&self) -> Option<usize> {
        match self {
            MatchResult::Keyword { index, .. } => Some(*index),
            MatchResult::Plain { .. } => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, MatchResult::Keyword { .. })
    }
}

/// Match `catalog` against `source` tokens
///
/// Every source token ends up in exactly one result, in source order.
/// A keyword whose phrase has no tokens (an empty phrase) never matches.
pub fn match_tokens<'k>(source: &[Token<'_>], catalog: &'k Catalog) -> Vec<MatchResult<'k>> {
    let source_keys: Vec<String> = source.iter().map(Token::normalized).collect();
    let phrase_keys: Vec<Vec<String>> = catalog
        .iter()
        .map(|keyword| normalized_tokens(keyword.phrase()))
        .collect();

    let mut results = Vec::with_capacity(source.len());
    let mut i = 0;

    while i < source_keys.len() {
        let matched = catalog
            .iter()
            .zip(&phrase_keys)
            .enumerate()
            .find(|(_, (_, keys))| {
                !keys.is_empty()
                    && i + keys.len() <= source_keys.len()
                    && source_keys[i..i + keys.len()] == keys[..]
            });

        match matched {
            Some((index, (keyword, keys))) => {
                let len = keys.len();
                results.push(MatchResult::Keyword {
                    keyword,
                    index,
                    tokens: i..i + len,
                });
                i += len;
            }
            None => {
                results.push(MatchResult::Plain { token: i });
                i += 1;
            }
        }
    }

    results
}
