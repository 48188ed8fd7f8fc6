//! Core geometry types for shell-canvas.
//!
//! Coordinates are in character cells, top-left anchored. Positions are signed
//! so components can hang off the top or left edge of a canvas and be clipped.

// =============================================================================
// Position
// =============================================================================

/// Top-left anchor of a component, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The canvas origin.
    pub const ORIGIN: Self = Self::new(0, 0);
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Size
// =============================================================================

/// Width and height in cells.
///
/// On components this is advisory: the compositor measures the rendered block
/// instead of trusting the declared size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// ZIndex
// =============================================================================

/// Slot requested when adding a component to a canvas.
///
/// ```
/// use shell_canvas::ZIndex;
///
/// let top = ZIndex::Append;   // one above the current maximum
/// let fixed: ZIndex = 3.into();
/// assert_eq!(fixed, ZIndex::At(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZIndex {
    /// Next integer above the highest key in use (0 on an empty canvas).
    #[default]
    Append,
    /// Explicit slot. Replaces whatever is already there.
    At(i32),
}

impl From<i32> for ZIndex {
    fn from(value: i32) -> Self {
        Self::At(value)
    }
}

impl From<Option<i32>> for ZIndex {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::Append, Self::At)
    }
}

// =============================================================================
// Text measurement
// =============================================================================

/// Length of a line in cells (one `char` per cell).
#[inline]
pub fn line_width(line: &str) -> usize {
    line.chars().count()
}

/// Width and height of a text block: longest line and number of lines.
///
/// Lines are split on `'\n'` only, so `""` is one empty line and a trailing
/// newline yields a trailing empty line.
pub fn block_dimensions(block: &str) -> (usize, usize) {
    block
        .split('\n')
        .fold((0, 0), |(width, height), line| (width.max(line_width(line)), height + 1))
}
