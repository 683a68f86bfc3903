//! Row layout and hit testing for segments on a character grid
//!
//! Segments are flowed into rows of a fixed display width. Each placed
//! piece of a tappable segment gets a hit box, so a click at a row and
//! column can be mapped back to the identifier to dispatch.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::text::{Segment, TapId};

/// A piece of one segment placed on one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Index of the segment in the laid out slice
    pub segment: usize,
    pub text: String,
    /// First display column
    pub col: u16,
}

impl Run {
    /// Display columns covered by the run
    pub fn cols(&self) -> Range<u16> {
        self.col..self.col.saturating_add(cell_width(&self.text))
    }
}

/// Display width of `text`, saturated to the grid's column type
fn cell_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Clickable area of a tappable segment piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitBox {
    pub row: u16,
    pub cols: Range<u16>,
    pub tap_id: TapId,
}

/// Segments flowed into rows
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    pub rows: Vec<Vec<Run>>,
    hit_boxes: Vec<HitBox>,
}

impl TextLayout {
    /// Identifier under a display cell, if any
    pub fn hit_test(&self, row: u16, col: u16) -> Option<TapId> {
        self.hit_boxes
            .iter()
            .find(|b| b.row == row && b.cols.contains(&col))
            .map(|b| b.tap_id)
    }

    pub fn hit_boxes(&self) -> &[HitBox] {
        &self.hit_boxes
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Flow `segments` into rows at most `width` columns wide
///
/// A segment that fits on the current row is kept whole. One that does not
/// fit moves to the next row, and is broken by character only when it is
/// wider than a full row. Newlines start a new row and keep any indentation
/// that follows them. Whitespace is only dropped at a soft wrap: the part
/// that would overflow a row, and any run that would open a wrapped row.
pub fn layout(segments: &[Segment], width: u16) -> TextLayout {
    let mut builder = LayoutBuilder::new(width.max(1));
    for (index, segment) in segments.iter().enumerate() {
        builder.place_segment(index, segment);
    }
    builder.finish()
}

struct LayoutBuilder {
    width: u16,
    rows: Vec<Vec<Run>>,
    hit_boxes: Vec<HitBox>,
    col: u16,
    /// Current row was opened by wrapping rather than by a newline
    wrapped: bool,
}

impl LayoutBuilder {
    fn new(width: u16) -> Self {
        Self {
            width,
            rows: vec![Vec::new()],
            hit_boxes: Vec::new(),
            col: 0,
            wrapped: false,
        }
    }

    fn place_segment(&mut self, index: usize, segment: &Segment) {
        let mut lines = segment.text.split('\n').peekable();
        while let Some(line) = lines.next() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                self.place_blank(index, segment, line);
            } else {
                self.place_text(index, segment, line);
            }
            if lines.peek().is_some() {
                self.break_line();
            }
        }
    }

    fn place_blank(&mut self, index: usize, segment: &Segment, blank: &str) {
        if blank.is_empty() || (self.col == 0 && self.wrapped) {
            return;
        }
        let count = u16::try_from(blank.chars().count()).unwrap_or(u16::MAX);
        let cells = count.min(self.remaining());
        if cells > 0 {
            self.push(index, segment, " ".repeat(cells as usize));
        }
    }

    fn place_text(&mut self, index: usize, segment: &Segment, text: &str) {
        let text_width = cell_width(text);
        if text_width > self.remaining() && self.col > 0 {
            self.wrap();
        }
        if text_width <= self.remaining() {
            self.push(index, segment, text.to_string());
            return;
        }

        // Wider than a whole row: break by character
        let mut piece = String::new();
        let mut piece_width = 0u16;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if piece_width.saturating_add(w) > self.remaining() && !piece.is_empty() {
                self.push(index, segment, std::mem::take(&mut piece));
                self.wrap();
                piece_width = 0;
            }
            piece.push(ch);
            piece_width = piece_width.saturating_add(w);
        }
        if !piece.is_empty() {
            self.push(index, segment, piece);
        }
    }

    fn push(&mut self, index: usize, segment: &Segment, text: String) {
        let run = Run {
            segment: index,
            text,
            col: self.col,
        };
        let row = (self.rows.len() - 1) as u16;
        if let Some(tap_id) = segment.tap_id {
            self.hit_boxes.push(HitBox {
                row,
                cols: run.cols(),
                tap_id,
            });
        }
        self.col = run.cols().end;
        if let Some(current) = self.rows.last_mut() {
            current.push(run);
        }
    }

    fn remaining(&self) -> u16 {
        self.width.saturating_sub(self.col)
    }

    /// Soft break: the row is full
    fn wrap(&mut self) {
        self.new_row();
        self.wrapped = true;
    }

    /// Hard break from a newline in the text
    fn break_line(&mut self) {
        self.new_row();
        self.wrapped = false;
    }

    fn new_row(&mut self) {
        self.rows.push(Vec::new());
        self.col = 0;
    }

    fn finish(self) -> TextLayout {
        TextLayout {
            rows: self.rows,
            hit_boxes: self.hit_boxes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{segment_text, Catalog, Keyword, TextConfig};
    use pretty_assertions::assert_eq;

    fn row_texts(layout: &TextLayout) -> Vec<String> {
        layout
            .rows
            .iter()
            .map(|row| row.iter().map(|r| r.text.as_str()).collect())
            .collect()
    }

    fn segments(text: &str, phrases: &[&str]) -> Vec<Segment> {
        let catalog: Catalog = phrases.iter().map(|p| Keyword::new(*p, || {})).collect();
        segment_text(text, &catalog, &TextConfig::new()).segments
    }

    #[test]
    fn test_single_row() {
        let layout = layout(&segments("tap the link", &["link"]), 40);
        assert_eq!(row_texts(&layout), vec!["tap the link"]);
        assert_eq!(layout.hit_boxes().len(), 1);
        assert_eq!(layout.hit_boxes()[0].cols, 8..12);
    }

    #[test]
    fn test_hit_test() {
        let segs = segments("tap the link", &["link"]);
        let id = segs[4].tap_id.unwrap();
        let layout = layout(&segs, 40);

        assert_eq!(layout.hit_test(0, 8), Some(id));
        assert_eq!(layout.hit_test(0, 11), Some(id));
        assert_eq!(layout.hit_test(0, 12), None);
        assert_eq!(layout.hit_test(0, 0), None);
        assert_eq!(layout.hit_test(1, 8), None);
    }

    #[test]
    fn test_wraps_whole_segments() {
        let layout = layout(&segments("one two three four", &[]), 9);
        assert_eq!(row_texts(&layout), vec!["one two ", "three ", "four"]);
    }

    #[test]
    fn test_multiword_keyword_moves_to_next_row() {
        let segs = segments("read the Privacy Policy", &["Privacy Policy"]);
        let layout = layout(&segs, 16);
        assert_eq!(row_texts(&layout), vec!["read the ", "Privacy Policy"]);
        let id = segs.iter().find_map(|s| s.tap_id).unwrap();
        assert_eq!(layout.hit_test(1, 0), Some(id));
    }

    #[test]
    fn test_long_segment_breaks_by_char() {
        let layout = layout(&segments("abcdefghij", &[]), 4);
        assert_eq!(row_texts(&layout), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_newlines_start_rows() {
        let layout = layout(&segments("first\nsecond", &[]), 40);
        assert_eq!(row_texts(&layout), vec!["first", "second"]);
    }

    #[test]
    fn test_indentation_after_newline_is_kept() {
        let segs = segments("a\n    b", &["b"]);
        let id = segs.iter().find_map(|s| s.tap_id).unwrap();
        let layout = layout(&segs, 40);
        assert_eq!(row_texts(&layout), vec!["a", "    b"]);
        assert_eq!(layout.hit_test(1, 4), Some(id));
        assert_eq!(layout.hit_test(1, 0), None);
    }

    #[test]
    fn test_leading_spaces_are_kept() {
        let layout = layout(&segments("  indented", &[]), 40);
        assert_eq!(row_texts(&layout), vec!["  indented"]);
        assert_eq!(layout.rows[0][1].col, 2);
    }

    #[test]
    fn test_whitespace_dropped_only_at_wrap() {
        // The run after "aaaa" overflows the full row
        let layout = layout(&segments("aaaa  bb\n  cc", &[]), 4);
        assert_eq!(row_texts(&layout), vec!["aaaa", "bb", "  cc"]);
    }

    #[test]
    fn test_oversized_line_saturates_columns() {
        let long = "x".repeat(70_000);
        assert_eq!(cell_width(&long), u16::MAX);

        let layout = layout(&segments(&long, &[]), 80);
        assert_eq!(layout.height(), 875);
        assert!(layout.rows.iter().all(|row| row.iter().all(|r| r.cols().end <= 80)));
    }

    #[test]
    fn test_keyword_across_newline() {
        let segs = segments("new\nyork", &["new york"]);
        let id = segs[0].tap_id.unwrap();
        let layout = layout(&segs, 40);
        assert_eq!(row_texts(&layout), vec!["new", "york"]);
        assert_eq!(layout.hit_test(0, 1), Some(id));
        assert_eq!(layout.hit_test(1, 1), Some(id));
    }

    #[test]
    fn test_wide_characters() {
        let segs = segments("東京 tower", &["tower"]);
        let layout = layout(&segs, 40);
        assert_eq!(layout.hit_boxes()[0].cols, 5..10);
    }

    #[test]
    fn test_empty() {
        let layout = layout(&[], 10);
        assert_eq!(layout.height(), 1);
        assert!(layout.hit_boxes().is_empty());
    }
}
