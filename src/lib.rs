//! tappable-text - inline text with tappable, individually styled keywords
//!
//! A body of text is split into word, whitespace and punctuation tokens.
//! An ordered keyword catalog is matched against the tokens (first declared
//! keyword wins, case and surrounding whitespace ignored), each resulting
//! segment gets its style resolved from keyword overrides, the text-wide
//! configuration and built-in defaults, and the styled segments are handed
//! out together with a dispatch registry that maps tap identifiers back to
//! their handlers.
//!
//! [`TappableText`] ties the pipeline to an instance lifecycle. The
//! [`config`] module loads text definitions from TOML, and [`layout`] flows
//! segments onto a character grid for hosts that hit-test clicks.

pub mod config;
pub mod error;
pub mod layout;
pub mod tappable;
pub mod terminal;
pub mod text;

pub use config::TextDefinition;
pub use error::{Result, TappableError};
pub use layout::{layout, HitBox, Run, TextLayout};
pub use tappable::{Phase, TappableText};
pub use text::{
    segment_text, Action, Assembly, Catalog, Color, DispatchRegistry, Font, FontDesign,
    FontWeight, Keyword, ResolvedStyle, Segment, TapId, TextConfig, Underline, UnderlinePattern,
    UnderlineStyle,
};
