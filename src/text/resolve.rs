//! Style resolution
//!
//! Every segment's final style is picked from three levels: the keyword's
//! own override, the text-wide configuration, and the built-in default.
//! Underline on/off, color and pattern are resolved independently.

use super::keyword::Action;
use super::matcher::MatchResult;
use super::style::{Color, Font, ResolvedStyle, Underline, UnderlinePattern, UnderlineStyle};

/// Color of plain text when nothing is configured
pub const DEFAULT_TEXT_COLOR: Color = Color::Default;
/// Color of keywords when neither the keyword nor the config sets one
pub const DEFAULT_KEYWORD_COLOR: Color = Color::Default;

/// Text-wide defaults
///
/// Built once per text instance with the fluent setters below. Setters may
/// be applied in any order.
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    text_color: Option<Color>,
    keyword_color: Option<Color>,
    font: Option<Font>,
    underline: Underline,
    on_plain_words_tap: Option<Action>,
}

impl TextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for non-keyword text
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Default color for all keywords
    pub fn keyword_color(mut self, color: Color) -> Self {
        self.keyword_color = Some(color);
        self
    }

    /// Font for the whole text
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Default underline for all keywords
    pub fn keyword_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Switch keyword underlining on or off, keeping color and pattern
    pub fn underline_keywords(mut self, enabled: bool) -> Self {
        self.underline.enabled = Some(enabled);
        self
    }

    /// Handler for taps on any non-keyword part of the text
    pub fn on_plain_words_tap(self, action: impl Fn() + 'static) -> Self {
        self.on_plain_words_tap_action(Action::new(action))
    }

    pub fn on_plain_words_tap_action(mut self, action: Action) -> Self {
        self.on_plain_words_tap = Some(action);
        self
    }

    pub fn text_color_value(&self) -> Option<Color> {
        self.text_color
    }

    pub fn keyword_color_value(&self) -> Option<Color> {
        self.keyword_color
    }

    pub fn font_value(&self) -> Option<Font> {
        self.font
    }

    pub fn underline_value(&self) -> Underline {
        self.underline
    }

    pub fn plain_words_action(&self) -> Option<&Action> {
        self.on_plain_words_tap.as_ref()
    }
}

/// Resolve the style of one match result
///
/// Pure: the output depends only on `result` and `config`.
pub fn resolve(result: &MatchResult<'_>, config: &TextConfig) -> ResolvedStyle {
    let font = config.font.unwrap_or_default();

    let Some(keyword) = result.keyword() else {
        let color = config.text_color.unwrap_or(DEFAULT_TEXT_COLOR);
        return ResolvedStyle {
            color,
            font,
            underline: UnderlineStyle::none(color),
        };
    };

    let own = keyword.underline_override().unwrap_or_default();
    let global = config.underline;

    let color = keyword
        .color_override()
        .or(config.keyword_color)
        .unwrap_or(DEFAULT_KEYWORD_COLOR);

    let underline = UnderlineStyle {
        enabled: own.enabled.or(global.enabled).unwrap_or(false),
        color: own
            .color
            .or(keyword.color_override())
            .or(global.color)
            .or(config.keyword_color)
            .unwrap_or(color),
        pattern: own
            .pattern
            .or(global.pattern)
            .unwrap_or(UnderlinePattern::Solid),
    };

    ResolvedStyle {
        color,
        font: keyword.font_override().unwrap_or(font),
        underline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::keyword::Keyword;
    use crate::text::style::{FontDesign, FontWeight};
    use pretty_assertions::assert_eq;

    fn keyword_style(keyword: &Keyword, config: &TextConfig) -> ResolvedStyle {
        let result = MatchResult::Keyword {
            keyword,
            index: 0,
            tokens: 0..1,
        };
        resolve(&result, config)
    }

    fn plain_style(config: &TextConfig) -> ResolvedStyle {
        resolve(&MatchResult::Plain { token: 0 }, config)
    }

    #[test]
    fn test_defaults() {
        let config = TextConfig::new();
        let keyword = Keyword::new("terms", || {});

        let style = keyword_style(&keyword, &config);
        assert_eq!(style.color, DEFAULT_KEYWORD_COLOR);
        assert_eq!(style.font, Font::default());
        assert!(!style.underline.enabled);
        assert_eq!(style.underline.pattern, UnderlinePattern::Solid);
        assert_eq!(style.underline.color, DEFAULT_KEYWORD_COLOR);

        let plain = plain_style(&config);
        assert_eq!(plain.color, DEFAULT_TEXT_COLOR);
        assert!(!plain.underline.enabled);
    }

    #[test]
    fn test_keyword_overrides_global() {
        let config = TextConfig::new()
            .keyword_color(Color::Green)
            .font(Font::system(16));
        let serif = Font::system(16).with_design(FontDesign::Serif);
        let keyword = Keyword::new("serif", || {}).color(Color::Blue).font(serif);

        let style = keyword_style(&keyword, &config);
        assert_eq!(style.color, Color::Blue);
        assert_eq!(style.font, serif);
    }

    #[test]
    fn test_global_keyword_color_used() {
        let config = TextConfig::new().keyword_color(Color::Green).text_color(Color::White);
        let keyword = Keyword::new("trust", || {});
        assert_eq!(keyword_style(&keyword, &config).color, Color::Green);
        assert_eq!(plain_style(&config).color, Color::White);
    }

    #[test]
    fn test_plain_text_ignores_keyword_settings() {
        let bold = Font::system(18).with_weight(FontWeight::Bold);
        let config = TextConfig::new()
            .keyword_color(Color::Red)
            .keyword_underline(Underline::on().color(Color::Red))
            .font(bold);
        let plain = plain_style(&config);
        assert_eq!(plain.color, DEFAULT_TEXT_COLOR);
        assert_eq!(plain.font, bold);
        assert!(!plain.underline.enabled);
    }

    #[test]
    fn test_underline_inherited_from_global() {
        let config = TextConfig::new()
            .keyword_underline(Underline::on().pattern(UnderlinePattern::Dash));
        let keyword = Keyword::new("freedom", || {});

        let underline = keyword_style(&keyword, &config).underline;
        assert!(underline.enabled);
        assert_eq!(underline.pattern, UnderlinePattern::Dash);
    }

    #[test]
    fn test_explicit_false_beats_global_true() {
        let config = TextConfig::new()
            .keyword_underline(Underline::on().pattern(UnderlinePattern::Dash));
        let keyword = Keyword::new("upgrade", || {}).underlined(false);

        let underline = keyword_style(&keyword, &config).underline;
        assert!(!underline.enabled);
        // Pattern still falls through independently
        assert_eq!(underline.pattern, UnderlinePattern::Dash);
    }

    #[test]
    fn test_keyword_enables_underline_without_global() {
        let keyword = Keyword::new("here", || {}).underlined(true);
        let underline = keyword_style(&keyword, &TextConfig::new()).underline;
        assert!(underline.enabled);
        assert_eq!(underline.pattern, UnderlinePattern::Solid);
    }

    #[test]
    fn test_underline_color_chain() {
        let global = TextConfig::new()
            .keyword_color(Color::Green)
            .keyword_underline(Underline::on().color(Color::Yellow));

        // Own underline color first
        let kw = Keyword::new("a", || {})
            .color(Color::Blue)
            .underline(Underline::on().color(Color::Magenta));
        assert_eq!(keyword_style(&kw, &global).underline.color, Color::Magenta);

        // Then the keyword's own color
        let kw = Keyword::new("a", || {}).color(Color::Blue);
        assert_eq!(keyword_style(&kw, &global).underline.color, Color::Blue);

        // Then the global underline color
        let kw = Keyword::new("a", || {});
        assert_eq!(keyword_style(&kw, &global).underline.color, Color::Yellow);

        // Then the global keyword color
        let config = TextConfig::new()
            .keyword_color(Color::Green)
            .underline_keywords(true);
        assert_eq!(keyword_style(&kw, &config).underline.color, Color::Green);

        // Finally the resolved foreground
        let config = TextConfig::new().underline_keywords(true);
        assert_eq!(keyword_style(&kw, &config).underline.color, DEFAULT_KEYWORD_COLOR);
    }

    #[test]
    fn test_underline_keywords_keeps_pattern() {
        let config = TextConfig::new()
            .keyword_underline(Underline::off().pattern(UnderlinePattern::Dot))
            .underline_keywords(true);
        assert_eq!(config.underline_value().enabled, Some(true));
        assert_eq!(config.underline_value().pattern, Some(UnderlinePattern::Dot));
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let config = TextConfig::new().keyword_color(Color::Cyan).underline_keywords(true);
        let keyword = Keyword::new("x", || {}).font(Font::system(12));
        assert_eq!(keyword_style(&keyword, &config), keyword_style(&keyword, &config));
    }
}
