//! Component - The rendering contract
//!
//! A component is anything that can render itself to a rectangular text block
//! and carries a position, an advisory size and a focus flag. Concrete
//! variants implement [`Component`] directly and keep their shared state in a
//! [`ComponentCore`]; helpers such as bordering and truncation are free
//! functions they compose.
//!
//! # Focus notifications
//!
//! [`Component::set_focus`] only notifies on a real transition:
//! - false → true fires `on_focus`
//! - true → false fires `focus_lost`
//! - same value: nothing happens
//!
//! # Example
//!
//! ```
//! use shell_canvas::component::{Component, ComponentCore};
//!
//! struct Star {
//!     core: ComponentCore,
//! }
//!
//! impl Component for Star {
//!     fn core(&self) -> &ComponentCore { &self.core }
//!     fn core_mut(&mut self) -> &mut ComponentCore { &mut self.core }
//!     fn render(&self) -> String { "*".to_string() }
//! }
//!
//! let mut star = Star { core: ComponentCore::new((3, 1)) };
//! assert!(star.set_focus(true));
//! assert!(!star.set_focus(true));
//! ```

pub mod label;

pub use label::{truncate_with_indicator, Button, Label};

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::events::Listener;
use crate::input::KeyPress;
use crate::types::{block_dimensions, Position, Size};

// =============================================================================
// ComponentId
// =============================================================================

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a component.
///
/// This is the sender passed to every notification a component raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Argument bundle for focus notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Gained,
    Lost,
}

// =============================================================================
// ComponentCore
// =============================================================================

/// State every component carries.
#[derive(Debug)]
pub struct ComponentCore {
    id: ComponentId,
    position: Position,
    size: Size,
    focused: bool,
    /// Fired when the component gains focus.
    pub on_focus: Listener<ComponentId, FocusChange>,
    /// Fired when the component loses focus.
    pub focus_lost: Listener<ComponentId, FocusChange>,
    /// Fired for every key delivered to the component.
    pub key_press: Listener<ComponentId, KeyPress>,
}

impl ComponentCore {
    /// Create a core at `position` with an unset (zero) size.
    pub fn new(position: impl Into<Position>) -> Self {
        Self {
            id: ComponentId::next(),
            position: position.into(),
            size: Size::default(),
            focused: false,
            on_focus: Listener::new(),
            focus_lost: Listener::new(),
            key_press: Listener::new(),
        }
    }

    /// Set the advisory size.
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: impl Into<Position>) {
        self.position = position.into();
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: impl Into<Size>) {
        self.size = size.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Transition the focus flag, notifying the matching channel.
    ///
    /// Returns true if the state changed.
    pub fn set_focus(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;

        if focused {
            debug!(component = %self.id, "gained focus");
            self.on_focus.notify(&self.id, &FocusChange::Gained);
        } else {
            debug!(component = %self.id, "lost focus");
            self.focus_lost.notify(&self.id, &FocusChange::Lost);
        }
        true
    }
}

// =============================================================================
// Component trait
// =============================================================================

/// Something that renders to a rectangular text block.
///
/// Every line of [`render`](Component::render) should have the same length;
/// the canvas measures the longest line and does not repair ragged blocks.
pub trait Component {
    fn core(&self) -> &ComponentCore;

    fn core_mut(&mut self) -> &mut ComponentCore;

    /// Current visual state as a block of `'\n'`-separated lines.
    fn render(&self) -> String {
        String::new()
    }

    /// Whether focus navigation may land on this component.
    fn is_focusable(&self) -> bool {
        true
    }

    /// Deliver a key press. The default forwards it to the `key_press` channel.
    fn handle_key(&mut self, key: &KeyPress) {
        let core = self.core();
        core.key_press.notify(&core.id(), key);
    }

    fn id(&self) -> ComponentId {
        self.core().id()
    }

    fn position(&self) -> Position {
        self.core().position()
    }

    fn set_position(&mut self, position: Position) {
        self.core_mut().set_position(position);
    }

    fn size(&self) -> Size {
        self.core().size()
    }

    fn set_size(&mut self, size: Size) {
        self.core_mut().set_size(size);
    }

    fn is_focused(&self) -> bool {
        self.core().is_focused()
    }

    /// See [`ComponentCore::set_focus`].
    fn set_focus(&mut self, focused: bool) -> bool {
        self.core_mut().set_focus(focused)
    }

    /// Size of the block `render` currently produces.
    ///
    /// Counted the way the canvas stamps it, so an empty render is one
    /// empty line (`0×1`).
    fn measured_size(&self) -> Size {
        let (width, height) = block_dimensions(&self.render());
        Size::new(
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }
}

/// A component shared between its owner and one or more canvases.
pub type SharedComponent = Rc<RefCell<dyn Component>>;

/// Wrap a component for adding to a canvas.
pub fn shared<C: Component + 'static>(component: C) -> SharedComponent {
    Rc::new(RefCell::new(component))
}

/// Two components are equal when they currently render the same block.
pub fn renders_equal(a: &dyn Component, b: &dyn Component) -> bool {
    a.render() == b.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed {
        core: ComponentCore,
        block: &'static str,
    }

    impl Fixed {
        fn new(block: &'static str) -> Self {
            Self {
                core: ComponentCore::new((0, 0)),
                block,
            }
        }
    }

    impl Component for Fixed {
        fn core(&self) -> &ComponentCore {
            &self.core
        }
        fn core_mut(&mut self) -> &mut ComponentCore {
            &mut self.core
        }
        fn render(&self) -> String {
            self.block.to_string()
        }
    }

    struct Bare {
        core: ComponentCore,
    }

    impl Component for Bare {
        fn core(&self) -> &ComponentCore {
            &self.core
        }
        fn core_mut(&mut self) -> &mut ComponentCore {
            &mut self.core
        }
    }

    fn counters(core: &mut ComponentCore) -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let gained = Rc::new(Cell::new(0));
        let lost = Rc::new(Cell::new(0));
        let gained_clone = gained.clone();
        let lost_clone = lost.clone();
        core.on_focus.on(move |_, change| {
            assert_eq!(*change, FocusChange::Gained);
            gained_clone.set(gained_clone.get() + 1);
        });
        core.focus_lost.on(move |_, change| {
            assert_eq!(*change, FocusChange::Lost);
            lost_clone.set(lost_clone.get() + 1);
        });
        (gained, lost)
    }

    #[test]
    fn test_default_render_is_empty() {
        let bare = Bare {
            core: ComponentCore::new((1, 2)),
        };
        assert_eq!(bare.render(), "");
        assert_eq!(bare.measured_size(), Size::new(0, 1));
        assert_eq!(bare.position(), Position::new(1, 2));
        assert!(bare.is_focusable());
    }

    #[test]
    fn test_focus_transitions_notify_once() {
        let mut fixed = Fixed::new("x");
        let (gained, lost) = counters(&mut fixed.core);

        assert!(fixed.set_focus(true));
        assert!(fixed.is_focused());
        assert_eq!((gained.get(), lost.get()), (1, 0));

        // Same value again: no notification
        assert!(!fixed.set_focus(true));
        assert_eq!((gained.get(), lost.get()), (1, 0));

        assert!(fixed.set_focus(false));
        assert_eq!((gained.get(), lost.get()), (1, 1));

        assert!(!fixed.set_focus(false));
        assert_eq!((gained.get(), lost.get()), (1, 1));
    }

    #[test]
    fn test_sender_is_component_id() {
        let mut fixed = Fixed::new("x");
        let expected = fixed.id();
        let seen = Rc::new(Cell::new(0u64));
        let seen_clone = seen.clone();
        fixed.core.on_focus.on(move |sender, _| seen_clone.set(sender.get()));

        fixed.set_focus(true);
        assert_eq!(seen.get(), expected.get());
    }

    #[test]
    fn test_handle_key_forwards_to_channel() {
        let mut fixed = Fixed::new("x");
        let keys = Rc::new(RefCell::new(Vec::new()));
        let keys_clone = keys.clone();
        fixed.core.key_press.on(move |_, key| keys_clone.borrow_mut().push(*key));

        fixed.handle_key(&KeyPress::char('a'));
        fixed.handle_key(&KeyPress::char('b'));
        assert_eq!(*keys.borrow(), vec![KeyPress::char('a'), KeyPress::char('b')]);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Fixed::new("x");
        let b = Fixed::new("x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_equality_by_rendered_block() {
        let a = Fixed::new("same");
        let b = Fixed::new("same");
        let c = Fixed::new("other");
        assert!(renders_equal(&a, &b));
        assert!(!renders_equal(&a, &c));
    }

    #[test]
    fn test_measured_size_uses_longest_line() {
        let fixed = Fixed::new("ab\nabcd\na");
        assert_eq!(fixed.measured_size(), Size::new(4, 3));
    }

    #[test]
    fn test_shared_component() {
        let component = shared(Fixed::new("hi"));
        component.borrow_mut().set_position(Position::new(5, 6));
        assert_eq!(component.borrow().position(), Position::new(5, 6));
        assert_eq!(component.borrow().render(), "hi");
    }
}
