//! Terminal host using crossterm
//!
//! Plays the part of a native rich-text view: paints laid out segments with
//! their resolved styles and reports mouse clicks as grid positions.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute, queue,
    style::{
        self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor, SetUnderlineColor,
    },
    terminal::{self, ClearType},
};

use crate::error::Result;
use crate::layout::TextLayout;
use crate::text::{Color, ResolvedStyle, Segment, UnderlinePattern};

/// Input the interactive host cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Left click at a zero-based row and column
    Tap { row: u16, col: u16 },
    Resize { cols: u16, rows: u16 },
    Quit,
}

/// Map a style color to a terminal color
pub fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
    }
}

/// Closest terminal underline attribute for a line pattern
pub fn underline_attribute(pattern: UnderlinePattern) -> Attribute {
    match pattern {
        UnderlinePattern::Solid => Attribute::Underlined,
        UnderlinePattern::Dash | UnderlinePattern::DashDot => Attribute::Underdashed,
        UnderlinePattern::Dot => Attribute::Underdotted,
    }
}

/// Queue the escape sequences for `text` drawn in `style`, then reset
pub fn write_styled(out: &mut impl Write, text: &str, style: &ResolvedStyle) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.color)))?;
    if style.font.is_bold() {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.font.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline.enabled {
        queue!(
            out,
            SetUnderlineColor(term_color(style.underline.color)),
            SetAttribute(underline_attribute(style.underline.pattern))
        )?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
    Ok(())
}

/// Write segments as one styled run, without layout
pub fn print_segments(out: &mut impl Write, segments: &[Segment]) -> Result<()> {
    for segment in segments {
        write_styled(out, &segment.text, &segment.style)?;
    }
    out.flush()?;
    Ok(())
}

/// Terminal wrapper for the interactive host
pub struct Terminal {
    /// Terminal width in columns
    cols: u16,
    /// Terminal height in rows
    rows: u16,
}

impl Terminal {
    /// Enter raw mode, the alternate screen and mouse capture
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let (cols, rows) = terminal::size()?;

        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(Self { cols, rows })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Paint the layout from the top-left corner and a status line at the bottom
    pub fn draw(&mut self, layout: &TextLayout, segments: &[Segment], status: &str) -> Result<()> {
        let mut out = io::stdout();
        queue!(out, terminal::Clear(ClearType::All))?;

        let visible = self.rows.saturating_sub(1) as usize;
        for (row, runs) in layout.rows.iter().enumerate().take(visible) {
            for run in runs {
                let Some(segment) = segments.get(run.segment) else {
                    continue;
                };
                queue!(out, cursor::MoveTo(run.col, row as u16))?;
                write_styled(&mut out, &run.text, &segment.style)?;
            }
        }

        queue!(
            out,
            cursor::MoveTo(0, self.rows.saturating_sub(1)),
            SetAttribute(Attribute::Reverse),
            Print(status),
            terminal::Clear(ClearType::UntilNewLine),
            SetAttribute(Attribute::Reset)
        )?;
        out.flush()?;
        Ok(())
    }

    /// Block until a tap, resize or quit request arrives
    pub fn next_event(&mut self) -> Result<HostEvent> {
        loop {
            match event::read()? {
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        return Ok(HostEvent::Tap {
                            row: mouse.row,
                            col: mouse.column,
                        });
                    }
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(HostEvent::Quit);
                    }
                }
                Event::Resize(cols, rows) => {
                    self.cols = cols;
                    self.rows = rows;
                    return Ok(HostEvent::Resize { cols, rows });
                }
                _ => {}
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
