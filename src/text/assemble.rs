//! Segment assembly
//!
//! Turns match results and their resolved styles into the ordered, styled
//! segments a host lays out as one continuous run of text, and binds every
//! tappable segment to its handler in a fresh dispatch registry.

use std::ops::Range;

use super::keyword::{Action, Catalog};
use super::matcher::{match_tokens, MatchResult};
use super::registry::{DispatchRegistry, TapId};
use super::resolve::{resolve, TextConfig};
use super::style::ResolvedStyle;
use super::tokens::{tokenize, Token};

/// A styled, optionally tappable piece of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Exact source text of the segment
    pub text: String,
    /// Byte range of the segment in the source
    pub range: Range<usize>,
    /// Catalog index of the keyword that produced this segment
    pub keyword: Option<usize>,
    pub style: ResolvedStyle,
    /// Identifier to report when the segment is tapped
    pub tap_id: Option<TapId>,
}

impl Segment {
    pub fn is_keyword(&self) -> bool {
        self.keyword.is_some()
    }

    pub fn is_tappable(&self) -> bool {
        self.tap_id.is_some()
    }
}

/// Output of one assembly pass
#[derive(Debug, Default)]
pub struct Assembly {
    pub segments: Vec<Segment>,
    pub registry: DispatchRegistry,
}

/// Build segments from match results and their styles
///
/// `matches` and `styles` are parallel. Keyword segments each get their own
/// identifier. Plain segments share a single identifier bound to
/// `plain_action`, or get none when no plain-words handler is configured.
pub fn assemble(
    tokens: &[Token<'_>],
    matches: &[MatchResult<'_>],
    styles: &[ResolvedStyle],
    plain_action: Option<&Action>,
) -> Assembly {
    let mut registry = DispatchRegistry::new();
    let mut plain_id: Option<TapId> = None;

    let segments = matches
        .iter()
        .zip(styles)
        .map(|(result, style)| {
            let group = &tokens[result.token_range()];
            let text: String = group.iter().map(|t| t.text).collect();
            let range = match (group.first(), group.last()) {
                (Some(first), Some(last)) => first.start..last.end(),
                _ => 0..0,
            };

            let tap_id = match result.keyword() {
                Some(keyword) => Some(registry.register(keyword.action().clone())),
                None => plain_action.map(|action| {
                    *plain_id.get_or_insert_with(|| registry.register(action.clone()))
                }),
            };

            Segment {
                text,
                range,
                keyword: result.keyword_index(),
                style: *style,
                tap_id,
            }
        })
        .collect();

    Assembly { segments, registry }
}

/// Run the whole pipeline: tokenize, match, resolve and assemble
pub fn segment_text(text: &str, catalog: &Catalog, config: &TextConfig) -> Assembly {
    let tokens = tokenize(text);
    let matches = match_tokens(&tokens, catalog);
    let styles: Vec<ResolvedStyle> = matches.iter().map(|m| resolve(m, config)).collect();

    let assembly = assemble(&tokens, &matches, &styles, config.plain_words_action());
    tracing::debug!(
        tokens = tokens.len(),
        segments = assembly.segments.len(),
        keywords = matches.iter().filter(|m| m.is_keyword()).count(),
        handlers = assembly.registry.len(),
        "assembled tappable text"
    );
    assembly
}
