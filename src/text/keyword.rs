//! Keyword declarations and the ordered keyword catalog

use std::fmt;
use std::rc::Rc;

use super::style::{Color, Font, Underline};

/// A tap handler
///
/// Cheap to clone; clones share the same closure.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Run the handler
    pub fn invoke(&self) {
        (self.0)()
    }

    /// Whether two actions share the same closure
    pub fn ptr_eq(&self, other: &Action) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

impl<F: Fn() + 'static> From<F> for Action {
    fn from(f: F) -> Self {
        Action::new(f)
    }
}

/// A phrase to make tappable, with optional style overrides
///
/// Override methods consume the keyword and return the modified value, so a
/// declared keyword is never changed behind the back of anyone holding a
/// clone of it.
#[derive(Debug, Clone)]
pub struct Keyword {
    phrase: String,
    action: Action,
    color: Option<Color>,
    font: Option<Font>,
    underline: Option<Underline>,
}

impl Keyword {
    /// Create a keyword matched case-insensitively against the text
    pub fn new(phrase: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self::with_action(phrase, Action::new(action))
    }

    /// Create a keyword sharing an existing action
    pub fn with_action(phrase: impl Into<String>, action: Action) -> Self {
        Self {
            phrase: phrase.into(),
            action,
            color: None,
            font: None,
            underline: None,
        }
    }

    /// Override the global keyword color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the global font
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Switch the underline on or off regardless of the global setting
    pub fn underlined(self, enabled: bool) -> Self {
        self.underline(Underline::toggled(enabled))
    }

    /// Replace the underline override
    pub fn underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn color_override(&self) -> Option<Color> {
        self.color
    }

    pub fn font_override(&self) -> Option<Font> {
        self.font
    }

    pub fn underline_override(&self) -> Option<Underline> {
        self.underline
    }
}

/// Ordered keyword declarations
///
/// Order is match precedence: when several keywords could start at the same
/// position the one declared first wins, even if a later one is longer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    keywords: Vec<Keyword>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one keyword
    pub fn with(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Append a keyword if present
    pub fn with_optional(self, keyword: Option<Keyword>) -> Self {
        match keyword {
            Some(keyword) => self.with(keyword),
            None => self,
        }
    }

    /// Apply `build` only when `condition` holds
    pub fn when(self, condition: bool, build: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            build(self)
        } else {
            self
        }
    }

    /// Append every keyword of a runtime collection, in iteration order
    pub fn with_all(mut self, keywords: impl IntoIterator<Item = Keyword>) -> Self {
        self.keywords.extend(keywords);
        self
    }

    pub fn push(&mut self, keyword: Keyword) {
        self.keywords.push(keyword);
    }

    pub fn get(&self, index: usize) -> Option<&Keyword> {
        self.keywords.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.keywords.iter()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl FromIterator<Keyword> for Catalog {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}

impl Extend<Keyword> for Catalog {
    fn extend<I: IntoIterator<Item = Keyword>>(&mut self, iter: I) {
        self.keywords.extend(iter);
    }
}

impl IntoIterator for Catalog {
    type Item = Keyword;
    type IntoIter = std::vec::IntoIter<Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}
