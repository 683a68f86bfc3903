//! Text definition files
//!
//! A definition describes one tappable text in TOML: the text itself, the
//! text-wide style, and the ordered keyword list. Actions are referred to by
//! name and bound to handlers by the host when the definition is built.
//!
//! Example:
//! ```toml
//! text = "By continuing you accept the Terms of Service and Privacy Policy."
//!
//! [style]
//! text-color = "bright-black"
//! keyword-color = "blue"
//! font = { size = 16, design = "serif" }
//! underline = { enabled = true, pattern = "dash" }
//! on-plain-words-tap = "dismiss"
//!
//! [[keyword]]
//! phrase = "Terms of Service"
//! action = "open-terms"
//!
//! [[keyword]]
//! phrase = "Privacy Policy"
//! action = "open-privacy"
//! color = "#1e90ff"
//! underline = false
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TappableError};
use crate::tappable::TappableText;
use crate::text::{Action, Catalog, Color, Font, Keyword, TextConfig, Underline, UnderlinePattern};

/// A complete text definition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TextDefinition {
    pub text: String,
    #[serde(default)]
    pub style: StyleDefinition,
    /// Keywords in precedence order
    #[serde(default, rename = "keyword")]
    pub keywords: Vec<KeywordDefinition>,
}

/// Text-wide style section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct StyleDefinition {
    pub text_color: Option<Color>,
    pub keyword_color: Option<Color>,
    pub font: Option<Font>,
    pub underline: Option<UnderlineSetting>,
    /// Action name fired by taps on non-keyword text
    pub on_plain_words_tap: Option<String>,
}

/// One `[[keyword]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct KeywordDefinition {
    pub phrase: String,
    /// Action name fired by taps on this keyword
    pub action: String,
    pub color: Option<Color>,
    pub font: Option<Font>,
    pub underline: Option<UnderlineSetting>,
}

/// Either `underline = true` or a detailed table
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum UnderlineSetting {
    Toggle(bool),
    Detailed(UnderlineDefinition),
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UnderlineDefinition {
    pub enabled: Option<bool>,
    pub color: Option<Color>,
    pub pattern: Option<UnderlinePattern>,
}

impl From<UnderlineSetting> for Underline {
    fn from(setting: UnderlineSetting) -> Self {
        match setting {
            UnderlineSetting::Toggle(enabled) => Underline::toggled(enabled),
            UnderlineSetting::Detailed(def) => Underline {
                enabled: def.enabled,
                color: def.color,
                pattern: def.pattern,
            },
        }
    }
}

impl TextDefinition {
    /// Parse a definition from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a definition file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let definition = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            keywords = definition.keywords.len(),
            "loaded text definition"
        );
        Ok(definition)
    }

    /// Every action name the definition refers to, in first-use order
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let all = self
            .keywords
            .iter()
            .map(|k| k.action.as_str())
            .chain(self.style.on_plain_words_tap.as_deref());
        for name in all {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Text-wide configuration, binding the plain-words action via `bind`
    pub fn config<F>(&self, mut bind: F) -> Result<TextConfig>
    where
        F: FnMut(&str) -> Option<Action>,
    {
        let style = &self.style;
        let mut config = TextConfig::new();

        if let Some(color) = style.text_color {
            config = config.text_color(color);
        }
        if let Some(color) = style.keyword_color {
            config = config.keyword_color(color);
        }
        if let Some(font) = style.font {
            config = config.font(font);
        }
        if let Some(underline) = style.underline {
            config = config.keyword_underline(underline.into());
        }
        if let Some(name) = &style.on_plain_words_tap {
            config = config.on_plain_words_tap_action(bind_action(&mut bind, name)?);
        }

        Ok(config)
    }

    /// Keyword catalog, binding each keyword's action via `bind`
    pub fn catalog<F>(&self, mut bind: F) -> Result<Catalog>
    where
        F: FnMut(&str) -> Option<Action>,
    {
        self.keywords
            .iter()
            .map(|def| {
                let action = bind_action(&mut bind, &def.action)?;
                let mut keyword = Keyword::with_action(&def.phrase, action);
                if let Some(color) = def.color {
                    keyword = keyword.color(color);
                }
                if let Some(font) = def.font {
                    keyword = keyword.font(font);
                }
                if let Some(underline) = def.underline {
                    keyword = keyword.underline(underline.into());
                }
                Ok(keyword)
            })
            .collect()
    }

    /// Build a ready-to-render text instance
    ///
    /// Fails with [`TappableError::UnknownAction`] when `bind` has no handler
    /// for a referenced action name.
    pub fn build<F>(&self, mut bind: F) -> Result<TappableText>
    where
        F: FnMut(&str) -> Option<Action>,
    {
        let catalog = self.catalog(&mut bind)?;
        let config = self.config(&mut bind)?;
        Ok(TappableText::new(self.text.clone(), catalog).with_config(config))
    }
}

fn bind_action<F>(bind: &mut F, name: &str) -> Result<Action>
where
    F: FnMut(&str) -> Option<Action>,
{
    bind(name).ok_or_else(|| TappableError::UnknownAction(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FontDesign;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const LEGAL: &str = r##"
text = "By continuing you accept the Terms of Service and Privacy Policy."

[style]
text-color = "bright-black"
keyword-color = "blue"
font = { size = 14, design = "serif" }
underline = { enabled = true, pattern = "dash" }
on-plain-words-tap = "dismiss"

[[keyword]]
phrase = "Terms of Service"
action = "open-terms"

[[keyword]]
phrase = "Privacy Policy"
action = "open-privacy"
color = "#1e90ff"
underline = false
"##;

    fn recording_binder(log: &Rc<RefCell<Vec<String>>>) -> impl FnMut(&str) -> Option<Action> {
        let log = log.clone();
        move |name: &str| {
            let log = log.clone();
            let name = name.to_string();
            Some(Action::new(move || log.borrow_mut().push(name.clone())))
        }
    }

    #[test]
    fn test_parse_definition() {
        let def = TextDefinition::from_toml_str(LEGAL).unwrap();
        assert_eq!(def.keywords.len(), 2);
        assert_eq!(def.keywords[0].phrase, "Terms of Service");
        assert_eq!(def.keywords[1].color, Some(Color::Rgb(0x1e, 0x90, 0xff)));
        assert_eq!(def.style.text_color, Some(Color::BrightBlack));
        assert_eq!(def.style.font.map(|f| (f.size, f.design)), Some((14, FontDesign::Serif)));
        assert_eq!(def.action_names(), vec!["open-terms", "open-privacy", "dismiss"]);
    }

    #[test]
    fn test_build_and_dispatch() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let def = TextDefinition::from_toml_str(LEGAL).unwrap();
        let mut text = def.build(recording_binder(&log)).unwrap();

        let segments = text.render().to_vec();
        let terms = segments.iter().find(|s| s.text == "Terms of Service").unwrap();
        let privacy = segments.iter().find(|s| s.text == "Privacy Policy").unwrap();
        let plain = segments.iter().find(|s| s.text == "accept").unwrap();

        assert_eq!(terms.style.color, Color::Blue);
        assert!(terms.style.underline.enabled);
        assert_eq!(terms.style.underline.pattern, UnderlinePattern::Dash);
        assert_eq!(privacy.style.color, Color::Rgb(0x1e, 0x90, 0xff));
        assert!(!privacy.style.underline.enabled);
        assert_eq!(plain.style.color, Color::BrightBlack);

        text.dispatch(terms.tap_id.unwrap());
        text.dispatch(plain.tap_id.unwrap());
        text.dispatch(privacy.tap_id.unwrap());
        assert_eq!(*log.borrow(), vec!["open-terms", "dismiss", "open-privacy"]);
    }

    #[test]
    fn test_unknown_action_is_error() {
        let def = TextDefinition::from_toml_str(LEGAL).unwrap();
        let err = def
            .build(|name: &str| (name != "open-privacy").then(|| Action::new(|| {})))
            .unwrap_err();
        assert!(matches!(err, TappableError::UnknownAction(ref name) if name == "open-privacy"));
    }

    #[test]
    fn test_minimal_definition() {
        let def = TextDefinition::from_toml_str(r#"text = "hello world""#).unwrap();
        assert!(def.keywords.is_empty());
        let mut text = def.build(|_: &str| None).unwrap();
        assert_eq!(text.render().len(), 3);
    }

    #[test]
    fn test_detailed_keyword_underline() {
        let def = TextDefinition::from_toml_str(
            r#"
text = "tap"
[[keyword]]
phrase = "tap"
action = "a"
underline = { color = "green", pattern = "dash-dot" }
"#,
        )
        .unwrap();
        let catalog = def.catalog(|_: &str| Some(Action::new(|| {}))).unwrap();
        let underline = catalog.get(0).and_then(|k| k.underline_override()).unwrap();
        assert_eq!(underline.enabled, None);
        assert_eq!(underline.color, Some(Color::Green));
        assert_eq!(underline.pattern, Some(UnderlinePattern::DashDot));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = TextDefinition::from_toml_str(
            r#"
text = "x"
[style]
underline = { enabled = true, pattern = "wavy" }
"#,
        );
        assert!(matches!(result, Err(TappableError::Toml(_))));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = TextDefinition::from_toml_str(
            r#"
text = "x"
[style]
keyword-color = "chartreuse"
"#,
        );
        assert!(matches!(result, Err(TappableError::Toml(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = TextDefinition::from_toml_str(
            r#"
text = "x"
[[keyword]]
phrase = "x"
action = "a"
colour = "red"
"#,
        );
        assert!(result.is_err());
    }
}
