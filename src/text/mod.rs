//! Keyword segmentation engine
//!
//! This module holds the whole text pipeline:
//! - tokenizing body text and keyword phrases
//! - matching the ordered keyword catalog against the tokens
//! - resolving each segment's style
//! - assembling styled segments and their tap registry

mod assemble;
mod keyword;
mod matcher;
mod registry;
mod resolve;
mod style;
mod tokens;

pub use assemble::{assemble, segment_text, Assembly, Segment};
pub use keyword::{Action, Catalog, Keyword};
pub use matcher::{match_tokens, MatchResult};
pub use registry::{DispatchRegistry, TapId, TAP_URL_SCHEME};
pub use resolve::{resolve, TextConfig, DEFAULT_KEYWORD_COLOR, DEFAULT_TEXT_COLOR};
pub use style::{
    Color, Font, FontDesign, FontWeight, ResolvedStyle, Underline, UnderlinePattern,
    UnderlineStyle,
};
pub use tokens::{normalized_tokens, tokenize, Token, TokenKind};
