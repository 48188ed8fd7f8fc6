//! Label and Button - Text components
//!
//! A [`Label`] shows a (possibly multi-line) string, optionally truncated to a
//! maximum length with an overflow indicator and optionally bordered. A
//! [`Button`] is a bordered label that reports Enter/Return presses while it
//! holds focus.
//!
//! Both are built from the same free helpers ([`truncate_with_indicator`] and
//! [`apply_border`]) rather than from each other.

use tracing::debug;

use super::{Component, ComponentCore, ComponentId};
use crate::border::{apply_border, BorderStyle};
use crate::events::Listener;
use crate::input::KeyPress;
use crate::types::{line_width, Position};

/// Default overflow indicator.
pub const ELLIPSIS: &str = "…";

// =============================================================================
// Truncation
// =============================================================================

/// Truncate every line of `text` to at most `max_length` chars.
///
/// A cut line ends with `indicator`, and the result including the indicator is
/// exactly `max_length` chars. If the indicator alone is too long it is cut
/// itself. Lines that already fit are untouched.
pub fn truncate_with_indicator(text: &str, max_length: usize, indicator: &str) -> String {
    text.split('\n')
        .map(|line| truncate_line(line, max_length, indicator))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_line(line: &str, max_length: usize, indicator: &str) -> String {
    if line_width(line) <= max_length {
        return line.to_string();
    }

    let indicator_width = line_width(indicator);
    if indicator_width >= max_length {
        return indicator.chars().take(max_length).collect();
    }

    let mut result: String = line.chars().take(max_length - indicator_width).collect();
    result.push_str(indicator);
    result
}

/// Right-pad every line to the longest one. Empty text stays empty.
fn pad_block(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    apply_border(text, &BorderStyle::NONE)
}

// =============================================================================
// Label
// =============================================================================

/// Static text, optionally truncated and bordered.
#[derive(Debug)]
pub struct Label {
    core: ComponentCore,
    text: String,
    show_border: bool,
    border: BorderStyle,
    max_length: Option<usize>,
    overflow_indicator: String,
}

impl Label {
    /// Create an unbordered label at `position`.
    pub fn new(position: impl Into<Position>, text: impl Into<String>) -> Self {
        Self {
            core: ComponentCore::new(position),
            text: text.into(),
            show_border: false,
            border: BorderStyle::THIN,
            max_length: None,
            overflow_indicator: ELLIPSIS.to_string(),
        }
    }

    /// Draw a border in the given style.
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.show_border = true;
        self.border = border;
        self
    }

    /// Truncate lines longer than `max_length` chars.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Indicator appended to truncated lines. Empty means a plain cut.
    pub fn with_overflow_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.overflow_indicator = indicator.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn shows_border(&self) -> bool {
        self.show_border
    }

    pub fn set_show_border(&mut self, show: bool) {
        self.show_border = show;
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn set_border(&mut self, border: BorderStyle) {
        self.border = border;
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
    }

    fn body(&self) -> String {
        match self.max_length {
            Some(max) => truncate_with_indicator(&self.text, max, &self.overflow_indicator),
            None => self.text.clone(),
        }
    }
}

impl Component for Label {
    fn core(&self) -> &ComponentCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        &mut self.core
    }

    fn render(&self) -> String {
        let body = self.body();
        if self.show_border {
            apply_border(&body, &self.border)
        } else {
            pad_block(&body)
        }
    }

    fn is_focusable(&self) -> bool {
        false
    }
}

// =============================================================================
// Button
// =============================================================================

/// A bordered label that can be pressed with Enter or Return.
#[derive(Debug)]
pub struct Button {
    label: Label,
    /// Fired when Enter/Return reaches the button while it is focused.
    pub on_press: Listener<ComponentId, KeyPress>,
}

impl Button {
    /// Create a button with a thin border.
    pub fn new(position: impl Into<Position>, text: impl Into<String>) -> Self {
        Self {
            label: Label::new(position, text).with_border(BorderStyle::THIN),
            on_press: Listener::new(),
        }
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.label = self.label.with_border(border);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.label = self.label.with_max_length(max_length);
        self
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }
}

impl Component for Button {
    fn core(&self) -> &ComponentCore {
        self.label.core()
    }

    fn core_mut(&mut self) -> &mut ComponentCore {
        self.label.core_mut()
    }

    fn render(&self) -> String {
        self.label.render()
    }

    fn handle_key(&mut self, key: &KeyPress) {
        let core = self.label.core();
        let id = core.id();
        core.key_press.notify(&id, key);

        if core.is_focused() && key.is_enter() {
            debug!(component = %id, "button pressed");
            self.on_press.notify(&id, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_with_indicator("hello", 10, ELLIPSIS), "hello");
        assert_eq!(truncate_with_indicator("hello", 5, ELLIPSIS), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_indicator("hello world", 6, ELLIPSIS), "hello…");
        assert_eq!(truncate_with_indicator("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn test_truncate_without_indicator() {
        assert_eq!(truncate_with_indicator("hello world", 5, ""), "hello");
    }

    #[test]
    fn test_truncate_degenerate_widths() {
        assert_eq!(truncate_with_indicator("hello", 0, ELLIPSIS), "");
        assert_eq!(truncate_with_indicator("hello", 2, "..."), "..");
    }

    #[test]
    fn test_truncate_each_line() {
        assert_eq!(truncate_with_indicator("abcdef\nab", 4, "~"), "abc~\nab");
    }

    #[test]
    fn test_label_plain() {
        let label = Label::new((0, 0), "hi");
        assert_eq!(label.render(), "hi");
        assert!(!label.is_focusable());
    }

    #[test]
    fn test_label_pads_ragged_text() {
        let label = Label::new((0, 0), "a\nabc");
        assert_eq!(label.render(), "a  \nabc");
    }

    #[test]
    fn test_label_empty_text() {
        let label = Label::new((0, 0), "");
        assert_eq!(label.render(), "");
    }

    #[test]
    fn test_label_bordered_and_truncated() {
        let label = Label::new((0, 0), "overflowing")
            .with_max_length(5)
            .with_border(BorderStyle::THIN);
        assert_eq!(label.render(), "┌─────┐\n│over…│\n└─────┘");
    }

    #[test]
    fn test_label_setters() {
        let mut label = Label::new((0, 0), "a");
        label.set_text("abc");
        label.set_max_length(Some(2));
        label.set_show_border(true);
        label.set_border(BorderStyle::THIN_UNDERLINE);
        assert_eq!(label.render(), "a…\n──");
    }

    #[test]
    fn test_button_renders_bordered() {
        let button = Button::new((0, 0), "OK");
        assert_eq!(button.render(), "┌──┐\n│OK│\n└──┘");
        assert!(button.is_focusable());
    }

    #[test]
    fn test_button_press_requires_focus() {
        let mut button = Button::new((0, 0), "OK");
        let presses = Rc::new(Cell::new(0));
        let presses_clone = presses.clone();
        button.on_press.on(move |_, _| presses_clone.set(presses_clone.get() + 1));

        let enter = KeyPress::new(keys::RETURN);
        button.handle_key(&enter);
        assert_eq!(presses.get(), 0);

        button.set_focus(true);
        button.handle_key(&enter);
        button.handle_key(&KeyPress::char('x'));
        assert_eq!(presses.get(), 1);
    }
}
