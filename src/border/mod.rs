//! Border styles and the border renderer.
//!
//! A [`BorderStyle`] is an immutable tuple of eight glyphs. Any glyph may be
//! the empty string, which removes that piece of the border entirely: a style
//! whose three top glyphs are empty produces no top row at all.
//!
//! # Example
//!
//! ```
//! use shell_canvas::border::{apply_border, BorderStyle};
//!
//! let framed = apply_border("ab", &BorderStyle::THIN);
//! assert_eq!(framed, "┌──┐\n│ab│\n└──┘");
//! ```

pub mod presets;

pub use presets::{preset, preset_names};

use crate::types::{line_width, Size};

// =============================================================================
// BorderSides (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which sides of a border actually contribute glyphs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderSides: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
    }
}

// =============================================================================
// BorderStyle
// =============================================================================

/// Eight glyphs describing a border, each empty or a single character.
///
/// Field order matches the tuple order used throughout the catalog:
/// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    pub top_left: &'static str,
    pub top: &'static str,
    pub top_right: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub bottom_left: &'static str,
    pub bottom: &'static str,
    pub bottom_right: &'static str,
}

impl BorderStyle {
    /// Build a style from its eight glyphs in catalog order.
    pub const fn new(glyphs: [&'static str; 8]) -> Self {
        let [top_left, top, top_right, left, right, bottom_left, bottom, bottom_right] = glyphs;
        Self {
            top_left,
            top,
            top_right,
            left,
            right,
            bottom_left,
            bottom,
            bottom_right,
        }
    }

    /// The glyphs in catalog order.
    pub const fn glyphs(&self) -> [&'static str; 8] {
        [
            self.top_left,
            self.top,
            self.top_right,
            self.left,
            self.right,
            self.bottom_left,
            self.bottom,
            self.bottom_right,
        ]
    }

    /// Sides with at least one non-empty glyph.
    pub fn sides(&self) -> BorderSides {
        let mut sides = BorderSides::NONE;
        if !(self.top_left.is_empty() && self.top.is_empty() && self.top_right.is_empty()) {
            sides |= BorderSides::TOP;
        }
        if !(self.bottom_left.is_empty() && self.bottom.is_empty() && self.bottom_right.is_empty()) {
            sides |= BorderSides::BOTTOM;
        }
        if !self.left.is_empty() {
            sides |= BorderSides::LEFT;
        }
        if !self.right.is_empty() {
            sides |= BorderSides::RIGHT;
        }
        sides
    }

    /// True when every glyph is empty.
    pub fn is_none(&self) -> bool {
        self.sides().is_empty()
    }

    /// Columns added to every body row (left glyph + right glyph).
    #[inline]
    pub fn horizontal_extra(&self) -> usize {
        line_width(self.left) + line_width(self.right)
    }

    /// Outer size of a bordered block whose body is `inner`.
    pub fn outer_size(&self, inner: Size) -> Size {
        let sides = self.sides();
        let rows = u16::from(sides.contains(BorderSides::TOP)) + u16::from(sides.contains(BorderSides::BOTTOM));
        Size::new(
            inner.width.saturating_add(self.horizontal_extra() as u16),
            inner.height.saturating_add(rows),
        )
    }

    fn top_row(&self, width: usize) -> String {
        edge_row(self.top_left, self.top, self.top_right, width)
    }

    fn bottom_row(&self, width: usize) -> String {
        edge_row(self.bottom_left, self.bottom, self.bottom_right, width)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::NONE
    }
}

fn edge_row(start: &str, fill: &str, end: &str, width: usize) -> String {
    let mut row = String::with_capacity(start.len() + fill.len() * width + end.len());
    row.push_str(start);
    for _ in 0..width {
        row.push_str(fill);
    }
    row.push_str(end);
    row
}

// =============================================================================
// Border renderer
// =============================================================================

/// Wrap a block of text in a border.
///
/// - Lines are split on `'\n'` only; a trailing newline adds an empty line.
/// - Empty input is treated as a single blank line (`" "`).
/// - Every line is right-padded with spaces to the longest line.
/// - Side glyphs are added to every line; top and bottom rows are built from
///   the corner and edge glyphs and omitted when they come out empty.
///
/// With [`BorderStyle::NONE`] the result is the input padded to a rectangle.
pub fn apply_border(text: &str, style: &BorderStyle) -> String {
    let text = if text.is_empty() { " " } else { text };
    let lines: Vec<&str> = text.split('\n').collect();
    let width = lines.iter().map(|line| line_width(line)).max().unwrap_or(0);

    let mut rows: Vec<String> = Vec::with_capacity(lines.len() + 2);

    let top = style.top_row(width);
    if !top.is_empty() {
        rows.push(top);
    }

    for line in lines {
        let pad = width - line_width(line);
        let mut row = String::with_capacity(line.len() + pad + style.left.len() + style.right.len());
        row.push_str(style.left);
        row.push_str(line);
        row.extend(std::iter::repeat_n(' ', pad));
        row.push_str(style.right);
        rows.push(row);
    }

    let bottom = style.bottom_row(width);
    if !bottom.is_empty() {
        rows.push(bottom);
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thin_border_around_single_line() {
        let framed = apply_border("ab", &BorderStyle::THIN);
        let rows: Vec<&str> = framed.split('\n').collect();
        assert_eq!(rows, vec!["┌──┐", "│ab│", "└──┘"]);
    }

    #[test]
    fn test_empty_input_becomes_blank_row() {
        assert_eq!(apply_border("", &BorderStyle::NONE), " ");
        assert_eq!(apply_border("", &BorderStyle::THIN), "┌─┐\n│ │\n└─┘");
    }

    #[test]
    fn test_no_border_pads_to_rectangle() {
        let out = apply_border("a\nabc\nab", &BorderStyle::NONE);
        assert_eq!(out, "a  \nabc\nab ");
    }

    #[test]
    fn test_body_rows_have_equal_length() {
        let inputs = ["x", "one\ntwo\nthree", "  \n\nlong line here", "█▀\n│"];
        for style in [BorderStyle::THIN, BorderStyle::BLOCK_VERTICAL, BorderStyle::NONE, BorderStyle::BLANK] {
            for input in inputs {
                let longest = input.split('\n').map(line_width).max().unwrap();
                let framed = apply_border(input, &style);
                let rows: Vec<&str> = framed.split('\n').collect();
                let skip_top = usize::from(style.sides().contains(BorderSides::TOP));
                let body = &rows[skip_top..skip_top + input.split('\n').count()];
                for row in body {
                    assert_eq!(line_width(row), longest + style.horizontal_extra());
                }
            }
        }
    }

    #[test]
    fn test_empty_edge_rows_are_omitted() {
        assert_eq!(apply_border("ab", &BorderStyle::THIN_UNDERLINE), "ab\n──");
        assert_eq!(apply_border("ab", &BorderStyle::THIN_OVERLINE), "──\nab");
        assert_eq!(apply_border("ab", &BorderStyle::THIN_VERTICAL), "│ab│");
        assert_eq!(apply_border("ab\ncd", &BorderStyle::THIN_HORIZONTAL), "──\nab\ncd\n──");
    }

    #[test]
    fn test_trailing_newline_keeps_empty_row() {
        assert_eq!(apply_border("ab\n", &BorderStyle::THIN_VERTICAL), "│ab│\n│  │");
        assert_eq!(apply_border("\n", &BorderStyle::NONE), "\n");
    }

    #[test]
    fn test_carriage_return_is_a_cell() {
        let framed = apply_border("a\r\nbc", &BorderStyle::THIN_VERTICAL);
        assert_eq!(framed, "│a\r│\n│bc│");
    }

    #[test]
    fn test_block_border_uses_half_blocks() {
        assert_eq!(apply_border("a", &BorderStyle::BLOCK), "█▀█\n█a█\n▀▀▀");
    }

    #[test]
    fn test_sides() {
        assert_eq!(BorderStyle::NONE.sides(), BorderSides::NONE);
        assert!(BorderStyle::NONE.is_none());
        assert_eq!(BorderStyle::THIN.sides(), BorderSides::all());
        assert_eq!(BorderStyle::THIN_UNDERLINE.sides(), BorderSides::BOTTOM);
        assert_eq!(BorderStyle::BLOCK_VERTICAL.sides(), BorderSides::LEFT | BorderSides::RIGHT);
    }

    #[test]
    fn test_outer_size() {
        assert_eq!(BorderStyle::THIN.outer_size(Size::new(4, 2)), Size::new(6, 4));
        assert_eq!(BorderStyle::THIN_OVERLINE.outer_size(Size::new(4, 2)), Size::new(4, 3));
        assert_eq!(BorderStyle::NONE.outer_size(Size::new(4, 2)), Size::new(4, 2));
    }

    #[test]
    fn test_glyph_round_trip() {
        let glyphs = ["+", "-", "+", "|", "|", "+", "-", "+"];
        let style = BorderStyle::new(glyphs);
        assert_eq!(style.glyphs(), glyphs);
        assert_eq!(apply_border("hi", &style), "+--+\n|hi|\n+--+");
    }
}
