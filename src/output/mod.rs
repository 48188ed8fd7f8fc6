//! Output - Where frames go
//!
//! The canvas never touches stdout directly. It hands each frame to an
//! [`OutputSink`] together with a [`ColorName`] and a flush request:
//!
//! - [`TerminalSink`] writes through crossterm, wrapping the text in
//!   foreground-color escape codes when a color other than
//!   [`ColorName::Default`] is requested.
//! - [`BufferSink`] records every write, for tests and headless rendering.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;

use crate::error::CanvasError;

// =============================================================================
// ColorName
// =============================================================================

/// Foreground colors understood by the output sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorName {
    #[default]
    Default,
    Black,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    Brown,
    /// Alias of red for error output.
    Error,
}

impl ColorName {
    pub const ALL: [ColorName; 9] = [
        ColorName::Default,
        ColorName::Black,
        ColorName::Red,
        ColorName::Orange,
        ColorName::Green,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Brown,
        ColorName::Error,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorName::Default => "default",
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Brown => "brown",
            ColorName::Error => "error",
        }
    }

    /// Parse a color name, falling back to [`ColorName::Default`] for
    /// anything unknown.
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Terminal color, or `None` for the terminal's own default.
    pub const fn to_crossterm(self) -> Option<Color> {
        match self {
            ColorName::Default => None,
            ColorName::Black => Some(Color::Black),
            ColorName::Red | ColorName::Error => Some(Color::DarkRed),
            ColorName::Orange => Some(Color::DarkYellow),
            ColorName::Green => Some(Color::DarkGreen),
            ColorName::Blue => Some(Color::DarkBlue),
            ColorName::Purple => Some(Color::DarkMagenta),
            ColorName::Brown => Some(Color::DarkCyan),
        }
    }
}

impl FromStr for ColorName {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ColorName::ALL
            .into_iter()
            .find(|color| color.as_str() == wanted)
            .ok_or_else(|| CanvasError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// OutputSink
// =============================================================================

/// Destination for rendered frames.
pub trait OutputSink {
    /// Write `text` in `color`, flushing afterwards if `flush` is set.
    fn write(&mut self, text: &str, color: ColorName, flush: bool) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write(&mut self, text: &str, color: ColorName, flush: bool) -> io::Result<()> {
        (**self).write(text, color, flush)
    }
}

// =============================================================================
// TerminalSink
// =============================================================================

/// Writes to a terminal stream using crossterm color commands.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    writer: W,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl TerminalSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write(&mut self, text: &str, color: ColorName, flush: bool) -> io::Result<()> {
        match color.to_crossterm() {
            Some(fg) => {
                self.writer
                    .queue(SetForegroundColor(fg))?
                    .queue(Print(text))?
                    .queue(ResetColor)?;
            }
            None => {
                self.writer.write_all(text.as_bytes())?;
            }
        }
        if flush {
            self.writer.flush()?;
        }
        Ok(())
    }
}

// =============================================================================
// BufferSink
// =============================================================================

/// Records writes in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    writes: Vec<(String, ColorName)>,
    flushes: usize,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, in order.
    pub fn writes(&self) -> &[(String, ColorName)] {
        &self.writes
    }

    /// Text of the most recent write.
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(|(text, _)| text.as_str())
    }

    /// All written text concatenated, colors dropped.
    pub fn contents(&self) -> String {
        self.writes.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// Number of writes that requested a flush.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.flushes = 0;
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str, color: ColorName, flush: bool) -> io::Result<()> {
        self.writes.push((text.to_string(), color));
        if flush {
            self.flushes += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!("green".parse::<ColorName>().unwrap(), ColorName::Green);
        assert_eq!(" Orange ".parse::<ColorName>().unwrap(), ColorName::Orange);
        assert!(matches!(
            "teal".parse::<ColorName>(),
            Err(CanvasError::UnknownColor(name)) if name == "teal"
        ));
    }

    #[test]
    fn test_color_parse_lossy_falls_back() {
        assert_eq!(ColorName::parse_lossy("teal"), ColorName::Default);
        assert_eq!(ColorName::parse_lossy("brown"), ColorName::Brown);
    }

    #[test]
    fn test_color_names_round_trip_display() {
        for color in ColorName::ALL {
            assert_eq!(color.to_string().parse::<ColorName>().unwrap(), color);
        }
    }

    #[test]
    fn test_crossterm_mapping() {
        assert_eq!(ColorName::Default.to_crossterm(), None);
        assert_eq!(ColorName::Orange.to_crossterm(), Some(Color::DarkYellow));
        assert_eq!(ColorName::Brown.to_crossterm(), Some(Color::DarkCyan));
        assert_eq!(ColorName::Error.to_crossterm(), ColorName::Red.to_crossterm());
    }

    #[test]
    fn test_terminal_sink_default_color_is_plain() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.write("ab\n", ColorName::Default, true).unwrap();
        assert_eq!(sink.into_inner(), b"ab\n");
    }

    #[test]
    fn test_terminal_sink_wraps_color() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.write("ab", ColorName::Green, false).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("ab"));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_buffer_sink_records() {
        let mut sink = BufferSink::new();
        sink.write("one", ColorName::Red, false).unwrap();
        sink.write("two", ColorName::Default, true).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.contents(), "onetwo");
        assert_eq!(sink.last(), Some("two"));
        assert_eq!(sink.writes()[0].1, ColorName::Red);
        assert_eq!(sink.flushes(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn emit(mut sink: impl OutputSink) {
            sink.write("x", ColorName::Blue, true).unwrap();
        }

        let mut sink = BufferSink::new();
        emit(&mut sink);
        assert_eq!(sink.last(), Some("x"));
    }
}
