//! Input - Key press events
//!
//! A [`KeyPress`] is a primary code plus an optional secondary code:
//! - Ordinary keys carry their character code and no secondary code.
//! - Special keys (arrows, function keys, Home/End, ...) carry a prefix
//!   ([`keys::NULL`] or [`keys::FUNCTION_PREFIX`]) and a scan code.
//!
//! Reading keys is behind the [`KeyReader`] trait so the platform reader is
//! chosen once, at construction, and tests can script input.

pub mod reader;

pub use reader::{ChannelKeyReader, CrosstermKeyReader, KeyReader, ScriptedKeyReader};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

// =============================================================================
// Key codes
// =============================================================================

/// Key code constants.
pub mod keys {
    /// Prefix of F1-F10 and a few Ctrl combinations.
    pub const NULL: u32 = 0x00;
    /// Prefix of arrows, navigation keys and F11/F12.
    pub const FUNCTION_PREFIX: u32 = 0xE0;

    pub const BACKSPACE: u32 = 0x08;
    /// DEL character some terminals send for Backspace.
    pub const BACKSPACE_CHAR: u32 = 0x7F;
    pub const ESCAPE: u32 = 0x1B;
    /// Ctrl+Enter or Ctrl+J.
    pub const ENTER: u32 = 0x0A;
    /// Enter/Return or Ctrl+M.
    pub const RETURN: u32 = 0x0D;
    /// Tab or Ctrl+I.
    pub const TAB: u32 = 0x09;
    pub const SPACE: u32 = 0x20;

    /// Control code for Ctrl+`letter`.
    pub const fn ctrl(letter: u8) -> u32 {
        (letter.to_ascii_uppercase() & 0x1F) as u32
    }

    pub const CTRL_A: u32 = ctrl(b'a');
    pub const CTRL_C: u32 = ctrl(b'c');
    pub const CTRL_Q: u32 = ctrl(b'q');
    pub const CTRL_S: u32 = ctrl(b's');
    pub const CTRL_V: u32 = ctrl(b'v');
    pub const CTRL_X: u32 = ctrl(b'x');
    pub const CTRL_Y: u32 = ctrl(b'y');
    pub const CTRL_Z: u32 = ctrl(b'z');

    // Scan codes (secondary byte of special keys)
    pub const ARROW_UP: u8 = b'H';
    pub const ARROW_DOWN: u8 = b'P';
    pub const ARROW_LEFT: u8 = b'K';
    pub const ARROW_RIGHT: u8 = b'M';
    pub const INSERT: u8 = b'R';
    pub const DELETE: u8 = b'S';
    pub const PAGE_UP: u8 = b'I';
    pub const PAGE_DOWN: u8 = b'Q';
    pub const HOME: u8 = b'G';
    pub const END: u8 = b'O';
    pub const BACK_TAB: u8 = 0x0F;
    /// F1; F2-F10 follow consecutively.
    pub const F1: u8 = b';';
    pub const F11: u8 = 0x85;
    pub const F12: u8 = 0x86;
}

/// Names of special keys by (prefix, scan code).
const COMBINATIONS: &[((u32, u8), &str)] = &[
    ((keys::FUNCTION_PREFIX, keys::ARROW_UP), "ArrowUp"),
    ((keys::FUNCTION_PREFIX, keys::ARROW_DOWN), "ArrowDown"),
    ((keys::FUNCTION_PREFIX, keys::ARROW_LEFT), "ArrowLeft"),
    ((keys::FUNCTION_PREFIX, keys::ARROW_RIGHT), "ArrowRight"),
    ((keys::NULL, keys::F1), "F1"),
    ((keys::NULL, keys::F1 + 1), "F2"),
    ((keys::NULL, keys::F1 + 2), "F3"),
    ((keys::NULL, keys::F1 + 3), "F4"),
    ((keys::NULL, keys::F1 + 4), "F5"),
    ((keys::NULL, keys::F1 + 5), "F6"),
    ((keys::NULL, keys::F1 + 6), "F7"),
    ((keys::NULL, keys::F1 + 7), "F8"),
    ((keys::NULL, keys::F1 + 8), "F9"),
    ((keys::NULL, keys::F1 + 9), "F10"),
    ((keys::FUNCTION_PREFIX, keys::F11), "F11"),
    ((keys::FUNCTION_PREFIX, keys::F12), "F12"),
    ((keys::FUNCTION_PREFIX, keys::INSERT), "Insert"),
    ((keys::FUNCTION_PREFIX, keys::DELETE), "Del"),
    ((keys::FUNCTION_PREFIX, keys::PAGE_UP), "PageUp"),
    ((keys::FUNCTION_PREFIX, keys::PAGE_DOWN), "PageDown"),
    ((keys::FUNCTION_PREFIX, keys::HOME), "Home"),
    ((keys::FUNCTION_PREFIX, keys::END), "End"),
    ((keys::NULL, keys::BACK_TAB), "BackTab"),
    ((keys::NULL, 0x03), "Ctrl+2"),
];

// =============================================================================
// KeyPress
// =============================================================================

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Character code, or the prefix of a special key.
    pub primary: u32,
    /// Scan code of a special key.
    pub secondary: Option<u8>,
}

impl KeyPress {
    /// An ordinary key.
    pub const fn new(primary: u32) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// A printable character.
    pub const fn char(c: char) -> Self {
        Self::new(c as u32)
    }

    /// A two-part special key.
    pub const fn special(prefix: u32, scan_code: u8) -> Self {
        Self {
            primary: prefix,
            secondary: Some(scan_code),
        }
    }

    /// Check if this is a multi-part special key.
    #[inline]
    pub const fn is_special(&self) -> bool {
        self.secondary.is_some()
    }

    /// Enter or Return.
    pub fn is_enter(&self) -> bool {
        !self.is_special() && (self.primary == keys::RETURN || self.primary == keys::ENTER)
    }

    pub fn is_tab(&self) -> bool {
        *self == Self::new(keys::TAB)
    }

    /// Shift+Tab.
    pub fn is_back_tab(&self) -> bool {
        *self == Self::special(keys::NULL, keys::BACK_TAB)
    }

    /// The character of an ordinary printable key.
    pub fn as_char(&self) -> Option<char> {
        if self.is_special() {
            return None;
        }
        char::from_u32(self.primary).filter(|c| !c.is_control())
    }

    /// Human-readable key name ("a", "Enter", "Ctrl+Q", "ArrowUp", ...).
    pub fn name(&self) -> String {
        if let Some(scan_code) = self.secondary {
            return COMBINATIONS
                .iter()
                .find(|(combo, _)| *combo == (self.primary, scan_code))
                .map_or_else(
                    || format!("Unknown({:#04x},{:#04x})", self.primary, scan_code),
                    |(_, name)| (*name).to_string(),
                );
        }

        match self.primary {
            keys::NULL => "Null".to_string(),
            keys::RETURN => "Enter".to_string(),
            keys::ENTER => "Ctrl+Enter".to_string(),
            keys::TAB => "Tab".to_string(),
            keys::ESCAPE => "Escape".to_string(),
            keys::BACKSPACE | keys::BACKSPACE_CHAR => "Backspace".to_string(),
            code @ 0x01..=0x1A => format!("Ctrl+{}", char::from(b'A' + (code as u8) - 1)),
            code => char::from_u32(code).map_or_else(|| format!("Unknown({code:#x})"), String::from),
        }
    }

    /// Convert a crossterm key event.
    ///
    /// Release events and keys with no equivalent code return `None`.
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let key = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
                Self::new(keys::ctrl(c as u8))
            }
            KeyCode::Char(c) => Self::char(c),
            KeyCode::Enter => Self::new(keys::RETURN),
            KeyCode::Tab => Self::new(keys::TAB),
            KeyCode::BackTab => Self::special(keys::NULL, keys::BACK_TAB),
            KeyCode::Backspace => Self::new(keys::BACKSPACE),
            KeyCode::Esc => Self::new(keys::ESCAPE),
            KeyCode::Up => Self::special(keys::FUNCTION_PREFIX, keys::ARROW_UP),
            KeyCode::Down => Self::special(keys::FUNCTION_PREFIX, keys::ARROW_DOWN),
            KeyCode::Left => Self::special(keys::FUNCTION_PREFIX, keys::ARROW_LEFT),
            KeyCode::Right => Self::special(keys::FUNCTION_PREFIX, keys::ARROW_RIGHT),
            KeyCode::Home => Self::special(keys::FUNCTION_PREFIX, keys::HOME),
            KeyCode::End => Self::special(keys::FUNCTION_PREFIX, keys::END),
            KeyCode::PageUp => Self::special(keys::FUNCTION_PREFIX, keys::PAGE_UP),
            KeyCode::PageDown => Self::special(keys::FUNCTION_PREFIX, keys::PAGE_DOWN),
            KeyCode::Insert => Self::special(keys::FUNCTION_PREFIX, keys::INSERT),
            KeyCode::Delete => Self::special(keys::FUNCTION_PREFIX, keys::DELETE),
            KeyCode::F(n @ 1..=10) => Self::special(keys::NULL, keys::F1 + (n - 1)),
            KeyCode::F(11) => Self::special(keys::FUNCTION_PREFIX, keys::F11),
            KeyCode::F(12) => Self::special(keys::FUNCTION_PREFIX, keys::F12),
            KeyCode::Null => Self::new(keys::NULL),
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
