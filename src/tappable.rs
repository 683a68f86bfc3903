//! The tappable text instance
//!
//! `TappableText` owns the source text, the keyword catalog, the text-wide
//! configuration and the dispatch registry of its latest render pass. Taps
//! are dispatched through it; tearing it down (explicitly or by dropping it)
//! releases every handler.

use crate::text::{
    segment_text, Action, Catalog, Color, DispatchRegistry, Font, Segment, TapId, TextConfig,
    Underline,
};

/// Lifecycle of a text instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Segments are current and their identifiers dispatch
    Assembled,
    /// No live identifiers; a render pass is needed before taps work
    TornDown,
}

/// Text with tappable, individually styled keywords
///
/// ```
/// use tappable_text::{Catalog, Color, Keyword, TappableText};
///
/// let mut text = TappableText::new(
///     "I agree to the Terms and Privacy Policy.",
///     Catalog::new()
///         .with(Keyword::new("Terms", || println!("terms")))
///         .with(Keyword::new("Privacy Policy", || println!("privacy")).color(Color::Green)),
/// )
/// .keyword_color(Color::Blue)
/// .underline_keywords(true);
///
/// let id = text.render().iter().find_map(|s| s.tap_id).unwrap();
/// assert!(text.dispatch(id));
///
/// text.teardown();
/// assert!(!text.dispatch(id));
/// ```
#[derive(Debug)]
pub struct TappableText {
    text: String,
    catalog: Catalog,
    config: TextConfig,
    segments: Vec<Segment>,
    registry: DispatchRegistry,
    phase: Phase,
}

impl TappableText {
    pub fn new(text: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            text: text.into(),
            catalog,
            config: TextConfig::default(),
            segments: Vec::new(),
            registry: DispatchRegistry::new(),
            phase: Phase::TornDown,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: TextConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Color for non-keyword text
    pub fn text_color(self, color: Color) -> Self {
        self.configure(|c| c.text_color(color))
    }

    /// Default color for all keywords
    pub fn keyword_color(self, color: Color) -> Self {
        self.configure(|c| c.keyword_color(color))
    }

    /// Font for the whole text
    pub fn text_font(self, font: Font) -> Self {
        self.configure(|c| c.font(font))
    }

    /// Default underline for all keywords
    pub fn keyword_underline(self, underline: Underline) -> Self {
        self.configure(|c| c.keyword_underline(underline))
    }

    /// Switch keyword underlining on or off
    pub fn underline_keywords(self, enabled: bool) -> Self {
        self.configure(|c| c.underline_keywords(enabled))
    }

    /// Handler for taps on any non-keyword part of the text
    pub fn on_plain_words_tap(self, action: impl Fn() + 'static) -> Self {
        let action = Action::new(action);
        self.configure(|c| c.on_plain_words_tap_action(action))
    }

    fn configure(mut self, update: impl FnOnce(TextConfig) -> TextConfig) -> Self {
        let config = std::mem::take(&mut self.config);
        self.set_config(update(config));
        self
    }

    /// Replace the text; the instance is torn down until the next render
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.teardown();
    }

    /// Replace the keyword catalog; the instance is torn down until the next render
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.teardown();
    }

    /// Replace the configuration; the instance is torn down until the next render
    pub fn set_config(&mut self, config: TextConfig) {
        self.config = config;
        self.teardown();
    }

    /// Run a render pass and return the fresh segments
    ///
    /// Identifiers from any earlier pass stop resolving as soon as this
    /// returns.
    pub fn render(&mut self) -> &[Segment] {
        let assembly = segment_text(&self.text, &self.catalog, &self.config);
        self.segments = assembly.segments;
        self.registry = assembly.registry;
        self.phase = Phase::Assembled;
        &self.segments
    }

    /// Dispatch a tap on the segment carrying `id`
    ///
    /// Unknown, stale and torn-down identifiers are ignored. Returns whether
    /// a handler ran.
    pub fn dispatch(&self, id: TapId) -> bool {
        self.registry.dispatch(id)
    }

    /// Dispatch a tap reported as a `tappable://<id>` link
    pub fn dispatch_url(&self, url: &str) -> bool {
        match TapId::from_url(url) {
            Some(id) => self.dispatch(id),
            None => false,
        }
    }

    /// Release every handler and drop the current segments
    pub fn teardown(&mut self) {
        if self.phase == Phase::Assembled {
            tracing::debug!(handlers = self.registry.len(), "tearing down tappable text");
        }
        self.registry.clear();
        self.segments.clear();
        self.phase = Phase::TornDown;
    }

    /// Segments of the latest render pass, empty when torn down
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment carrying `id`, if it is live
    pub fn segment_for(&self, id: TapId) -> Option<&Segment> {
        if !self.registry.contains(id) {
            return None;
        }
        self.segments.iter().find(|s| s.tap_id == Some(id))
    }

    /// Text of the current segments joined back together
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_assembled(&self) -> bool {
        self.phase == Phase::Assembled
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }
}

impl Drop for TappableText {
    fn drop(&mut self) {
        self.teardown();
    }
}
