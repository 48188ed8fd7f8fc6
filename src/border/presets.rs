//! Border preset catalog.
//!
//! Twelve built-in styles:
//! - none, blank
//! - thin, thin-horizontal, thin-vertical, thin-underline, thin-overline
//! - block, block-horizontal, block-vertical, block-overline, block-underline
//!
//! The catalog is a constant table; styles are looked up by name with
//! [`preset`].

use super::BorderStyle;

impl BorderStyle {
    /// No border at all.
    pub const NONE: Self = Self::new(["", "", "", "", "", "", "", ""]);

    /// Spaces on every side.
    pub const BLANK: Self = Self::new([" ", " ", " ", " ", " ", " ", " ", " "]);

    // Thin box-drawing family
    pub const THIN: Self = Self::new(["┌", "─", "┐", "│", "│", "└", "─", "┘"]);
    pub const THIN_HORIZONTAL: Self = Self::new(["", "─", "", "", "", "", "─", ""]);
    pub const THIN_VERTICAL: Self = Self::new(["", "", "", "│", "│", "", "", ""]);
    pub const THIN_UNDERLINE: Self = Self::new(["", "", "", "", "", "", "─", ""]);
    pub const THIN_OVERLINE: Self = Self::new(["", "─", "", "", "", "", "", ""]);

    // Block-glyph family
    pub const BLOCK: Self = Self::new(["█", "▀", "█", "█", "█", "▀", "▀", "▀"]);
    pub const BLOCK_HORIZONTAL: Self = Self::new(["", "▀", "", "", "", "", "▀", ""]);
    pub const BLOCK_VERTICAL: Self = Self::new(["", "", "", "█", "█", "", "", ""]);
    pub const BLOCK_OVERLINE: Self = Self::new(["", "▀", "", "", "", "", "", ""]);
    pub const BLOCK_UNDERLINE: Self = Self::new(["", "", "", "", "", "", "▀", ""]);
}

const CATALOG: &[(&str, BorderStyle)] = &[
    ("none", BorderStyle::NONE),
    ("blank", BorderStyle::BLANK),
    ("thin", BorderStyle::THIN),
    ("thin-horizontal", BorderStyle::THIN_HORIZONTAL),
    ("thin-vertical", BorderStyle::THIN_VERTICAL),
    ("thin-underline", BorderStyle::THIN_UNDERLINE),
    ("thin-overline", BorderStyle::THIN_OVERLINE),
    ("block", BorderStyle::BLOCK),
    ("block-horizontal", BorderStyle::BLOCK_HORIZONTAL),
    ("block-vertical", BorderStyle::BLOCK_VERTICAL),
    ("block-overline", BorderStyle::BLOCK_OVERLINE),
    ("block-underline", BorderStyle::BLOCK_UNDERLINE),
];

/// Get a preset by name.
///
/// Case-insensitive; `_` and spaces are accepted in place of `-`.
pub fn preset(name: &str) -> Option<BorderStyle> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    CATALOG
        .iter()
        .find(|(preset_name, _)| *preset_name == normalized)
        .map(|(_, style)| *style)
}

/// Names of all presets, in catalog order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}
