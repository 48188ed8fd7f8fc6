//! FrameBuffer - The per-draw character grid
//!
//! A frame starts as `height` rows of `width` spaces. Components are stamped
//! in one at a time; a stamp writes one `char` per cell. [`FrameBuffer::finish`]
//! makes sure every row is exactly `width` cells.
//!
//! Rows outside `[0, height)` and columns outside `[0, width)` are dropped
//! while stamping, so clipping never fails and never allocates.

use std::fmt;

/// A grid of character cells, rebuilt for every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    rows: Vec<Vec<char>>,
}

impl FrameBuffer {
    /// Create a blank frame.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            rows: vec![vec![' '; width as usize]; height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        // Row count is fixed at construction
        self.rows.len() as u16
    }

    /// Stamp `lines` with their top-left corner at (`x`, `y`).
    ///
    /// Each character overwrites exactly one cell; cells the lines do not
    /// cover keep what was there, including cells to the right of a short
    /// line. The rest of the row is never blanked.
    pub fn stamp<'a>(&mut self, x: i32, y: i32, lines: impl IntoIterator<Item = &'a str>) {
        let width = i64::from(self.width);
        for (offset, line) in lines.into_iter().enumerate() {
            let Some(row_index) = row_index(y, offset, self.rows.len()) else {
                continue;
            };
            let row = &mut self.rows[row_index];

            for (column, c) in (i64::from(x)..).zip(line.chars()) {
                if column >= width {
                    break;
                }
                if let Ok(column) = usize::try_from(column) {
                    row[column] = c;
                }
            }
        }
    }

    /// Cut or pad every row to exactly `width` cells.
    pub fn finish(&mut self) {
        let width = self.width as usize;
        for row in &mut self.rows {
            row.resize(width, ' ');
        }
    }

    /// Cell at (`x`, `y`), if inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Row `y` as a string.
    pub fn row(&self, y: usize) -> Option<String> {
        self.rows.get(y).map(|row| row.iter().collect())
    }

    /// All rows as strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

impl fmt::Display for FrameBuffer {
    /// Rows joined with `'\n'`, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                fmt::Write::write_char(f, *c)?;
            }
        }
        Ok(())
    }
}

fn row_index(y: i32, offset: usize, height: usize) -> Option<usize> {
    let row = i64::from(y) + i64::try_from(offset).ok()?;
    usize::try_from(row).ok().filter(|&row| row < height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(mut frame: FrameBuffer) -> String {
        frame.finish();
        frame.to_string()
    }

    #[test]
    fn test_blank_frame() {
        let frame = FrameBuffer::new(3, 2);
        assert_eq!(frame.to_string(), "   \n   ");
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn test_stamp_inside() {
        let mut frame = FrameBuffer::new(5, 2);
        frame.stamp(1, 1, ["ab"]);
        assert_eq!(frame.get(1, 1), Some('a'));
        assert_eq!(finished(frame), "     \n ab  ");
    }

    #[test]
    fn test_stamp_overwrites_only_covered_cells() {
        let mut frame = FrameBuffer::new(6, 1);
        frame.stamp(0, 0, ["abcdef"]);
        frame.stamp(2, 0, ["XY"]);
        assert_eq!(finished(frame), "abXYef");
    }

    #[test]
    fn test_stamp_clips_right_edge() {
        let mut frame = FrameBuffer::new(4, 1);
        frame.stamp(2, 0, ["abcdef"]);
        assert_eq!(frame.row(0).unwrap(), "  ab");
        assert_eq!(finished(frame), "  ab");
    }

    #[test]
    fn test_stamp_beyond_row_end_is_dropped() {
        let mut frame = FrameBuffer::new(2, 1);
        frame.stamp(5, 0, ["z"]);
        assert_eq!(frame.row(0).unwrap(), "  ");
    }

    #[test]
    fn test_stamp_far_right_does_not_grow_rows() {
        let mut frame = FrameBuffer::new(3, 1);
        frame.stamp(i32::MAX - 1, 0, ["x"]);
        frame.stamp(i32::MAX, 0, ["yy"]);
        assert_eq!(frame.row(0).unwrap(), "   ");
    }

    #[test]
    fn test_stamp_clips_left_and_vertical() {
        let mut frame = FrameBuffer::new(4, 2);
        frame.stamp(-2, -1, ["hidden", "abcdef", "xxyy", "gone"]);
        assert_eq!(finished(frame), "cdef\nyy  ");
    }

    #[test]
    fn test_lines() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.stamp(0, 1, ["xy"]);
        let lines: Vec<String> = frame.lines().collect();
        assert_eq!(lines, vec!["  ", "xy"]);
    }
}
