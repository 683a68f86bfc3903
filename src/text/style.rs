//! Style tokens for tappable text
//!
//! The engine treats these values as opaque: it only picks one over another
//! during resolution. Hosts decide how a `Color` or `Font` is actually drawn.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TappableError;

/// Text colors (ANSI 16-color palette plus true color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Color {
    /// The host's label color
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Kebab-case name of a palette color, `None` for true colors
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
            Color::Rgb(..) => return None,
        };
        Some(name)
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "default" | "label" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Color {
    type Err = TappableError;

    /// Parse a palette name (`blue`, `bright-black`) or `#rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Color::from_hex(hex),
            None => Color::from_name(&trimmed.to_lowercase().replace('_', "-")),
        };
        parsed.ok_or_else(|| TappableError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = TappableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            other => f.write_str(other.name().unwrap_or("default")),
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Font design family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontDesign {
    #[default]
    Default,
    Monospaced,
    Serif,
    Rounded,
}

/// Font selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Font {
    /// Point size
    pub size: u16,
    pub weight: FontWeight,
    pub design: FontDesign,
    pub italic: bool,
}

impl Font {
    /// System font at the given point size
    pub fn system(size: u16) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Builder: set weight
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Builder: set design
    pub fn with_design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn is_bold(&self) -> bool {
        matches!(self.weight, FontWeight::Medium | FontWeight::Bold)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 16,
            weight: FontWeight::Regular,
            design: FontDesign::Default,
            italic: false,
        }
    }
}

/// Underline line pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnderlinePattern {
    #[default]
    Solid,
    Dash,
    Dot,
    #[serde(alias = "dashDot")]
    DashDot,
}

/// Underline override
///
/// Every field is optional so an unset field falls through to the next
/// level of the hierarchy. `enabled: Some(false)` is an explicit opt-out and
/// beats an inherited `Some(true)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Underline {
    pub enabled: Option<bool>,
    pub color: Option<Color>,
    pub pattern: Option<UnderlinePattern>,
}

impl Underline {
    /// Underline explicitly switched on
    pub fn on() -> Self {
        Self::toggled(true)
    }

    /// Underline explicitly switched off
    pub fn off() -> Self {
        Self::toggled(false)
    }

    pub fn toggled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Default::default()
        }
    }

    /// Builder: set underline color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: set line pattern
    pub fn pattern(mut self, pattern: UnderlinePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Fully resolved underline for one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnderlineStyle {
    pub enabled: bool,
    pub color: Color,
    pub pattern: UnderlinePattern,
}

impl UnderlineStyle {
    /// No underline, color following the foreground
    pub fn none(color: Color) -> Self {
        Self {
            enabled: false,
            color,
            pattern: UnderlinePattern::Solid,
        }
    }
}

/// Fully resolved style of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    /// Foreground color
    pub color: Color,
    pub font: Font,
    pub underline: UnderlineStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_name() {
        assert_eq!("blue".parse::<Color>().unwrap(), Color::Blue);
        assert_eq!("Bright-Black".parse::<Color>().unwrap(), Color::BrightBlack);
        assert_eq!("bright_cyan".parse::<Color>().unwrap(), Color::BrightCyan);
        assert_eq!("gray".parse::<Color>().unwrap(), Color::BrightBlack);
        assert_eq!("label".parse::<Color>().unwrap(), Color::Default);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!("#1e90ff".parse::<Color>().unwrap(), Color::Rgb(0x1e, 0x90, 0xff));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_invalid() {
        let err = "chartreuse".parse::<Color>().unwrap_err();
        assert!(matches!(err, TappableError::UnknownColor(ref name) if name == "chartreuse"));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::BrightMagenta.to_string(), "bright-magenta");
        assert_eq!(Color::Rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn test_underline_builders() {
        let underline = Underline::on().color(Color::Green).pattern(UnderlinePattern::Dash);
        assert_eq!(underline.enabled, Some(true));
        assert_eq!(underline.color, Some(Color::Green));
        assert_eq!(underline.pattern, Some(UnderlinePattern::Dash));

        let off = Underline::off();
        assert_eq!(off.enabled, Some(false));
        assert_eq!(off.color, None);
        assert_eq!(Underline::default().enabled, None);
    }

    #[test]
    fn test_font_builders() {
        let font = Font::system(14)
            .with_weight(FontWeight::Bold)
            .with_design(FontDesign::Rounded)
            .with_italic();
        assert_eq!(font.size, 14);
        assert!(font.is_bold());
        assert!(font.italic);
        assert_eq!(font.design, FontDesign::Rounded);
        assert!(!Font::default().is_bold());
    }
}
