//! Focus - Keyboard navigation between canvas components
//!
//! A [`FocusCoordinator`] remembers which canvas entry holds focus and moves it
//! on request:
//! - Focus order is ascending z-index over components whose
//!   [`is_focusable`](crate::Component::is_focusable) is true.
//! - `focus_next` / `focus_prev` wrap around. With nothing focused, next picks
//!   the first entry and prev the last.
//! - Moving focus fires lost-focus on the old component before gained-focus on
//!   the new one.
//! - Keys are routed to the focused component only.
//!
//! # Example
//!
//! ```
//! use shell_canvas::{shared, Button, Canvas, FocusCoordinator, Label, ZIndex};
//!
//! let mut canvas = Canvas::new(20, 5);
//! canvas.add(shared(Label::new((0, 0), "title")), ZIndex::Append).unwrap();
//! canvas.add(shared(Button::new((0, 1), "OK")), ZIndex::Append).unwrap();
//! canvas.add(shared(Button::new((5, 1), "Cancel")), ZIndex::Append).unwrap();
//!
//! let mut focus = FocusCoordinator::new();
//! assert!(focus.focus_next(&canvas));
//! assert_eq!(focus.focused_z(), Some(1)); // the label is skipped
//! assert!(focus.focus_next(&canvas));
//! assert!(focus.focus_next(&canvas));
//! assert_eq!(focus.focused_z(), Some(1)); // wrapped
//! ```

use std::rc::Rc;

use tracing::{debug, warn};

use crate::canvas::Canvas;
use crate::component::SharedComponent;
use crate::input::KeyPress;

/// Tracks the focused canvas entry.
#[derive(Default)]
pub struct FocusCoordinator {
    focused: Option<(i32, SharedComponent)>,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Z-index the focused component was last seen at.
    ///
    /// Refreshed by navigation and key routing, so it may lag behind a
    /// [`Canvas::set_z`] until the next call that takes the canvas.
    pub fn focused_z(&self) -> Option<i32> {
        self.focused.as_ref().map(|(z, _)| *z)
    }

    /// The focused component, if it is still on `canvas` at any z-index.
    pub fn focused(&self, canvas: &Canvas) -> Option<SharedComponent> {
        let (_, component) = self.focused.as_ref()?;
        locate(canvas, component).map(|_| component.clone())
    }

    /// Z-indices of focusable components, ascending.
    pub fn focus_order(&self, canvas: &Canvas) -> Vec<i32> {
        canvas
            .iter()
            .filter(|(_, component)| {
                component
                    .try_borrow()
                    .map(|component| component.is_focusable())
                    .unwrap_or(false)
            })
            .map(|(z, _)| z)
            .collect()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move focus forward, wrapping. Returns true if focus moved.
    pub fn focus_next(&mut self, canvas: &Canvas) -> bool {
        self.step(canvas, 1)
    }

    /// Move focus backward, wrapping. Returns true if focus moved.
    pub fn focus_prev(&mut self, canvas: &Canvas) -> bool {
        self.step(canvas, -1)
    }

    /// Focus the `index`-th entry of the focus order.
    ///
    /// Out of range returns false and leaves focus unchanged.
    pub fn focus_index(&mut self, canvas: &Canvas, index: usize) -> bool {
        match self.focus_order(canvas).get(index) {
            Some(&z) => {
                self.move_to(canvas, z);
                true
            }
            None => false,
        }
    }

    /// Focus the first focusable component.
    pub fn focus_first(&mut self, canvas: &Canvas) -> bool {
        self.focus_index(canvas, 0)
    }

    /// Focus the last focusable component.
    pub fn focus_last(&mut self, canvas: &Canvas) -> bool {
        let order = self.focus_order(canvas);
        match order.last() {
            Some(&z) => {
                self.move_to(canvas, z);
                true
            }
            None => false,
        }
    }

    /// Clear focus, notifying the component that held it.
    pub fn blur(&mut self) {
        if let Some((z, component)) = self.focused.take() {
            debug!(z, "focus cleared");
            set_focus(&component, false);
        }
    }

    fn step(&mut self, canvas: &Canvas, direction: isize) -> bool {
        let order = self.focus_order(canvas);
        if order.is_empty() {
            return false;
        }

        let current_z = self.refresh(canvas);
        let current = current_z.and_then(|z| order.iter().position(|&candidate| candidate == z));

        let target = match current {
            None if direction > 0 => order[0],
            None => order[order.len() - 1],
            Some(pos) => {
                let len = order.len() as isize;
                order[(pos as isize + direction).rem_euclid(len) as usize]
            }
        };

        if current.is_some() && current_z == Some(target) {
            return false;
        }
        self.move_to(canvas, target);
        true
    }

    /// Re-read the focused component's z-index from `canvas`.
    fn refresh(&mut self, canvas: &Canvas) -> Option<i32> {
        let (stored, component) = self.focused.as_mut()?;
        let z = locate(canvas, component)?;
        if *stored != z {
            debug!(old = *stored, new = z, "focused component changed z-index");
            *stored = z;
        }
        Some(z)
    }

    fn move_to(&mut self, canvas: &Canvas, z: i32) {
        let Some(component) = canvas.get(z).cloned() else {
            return;
        };
        if let Some((stored, current)) = &mut self.focused {
            if Rc::ptr_eq(current, &component) {
                *stored = z;
                return;
            }
        }

        self.blur();
        debug!(z, "focus moved");
        set_focus(&component, true);
        self.focused = Some((z, component));
    }

    // =========================================================================
    // Key routing
    // =========================================================================

    /// Deliver `key` to the focused component.
    ///
    /// Returns false when nothing is focused. If the focused component has
    /// left the canvas, focus is cleared first.
    pub fn on_key(&mut self, canvas: &Canvas, key: &KeyPress) -> bool {
        if self.focused.is_none() {
            return false;
        }
        if self.refresh(canvas).is_none() {
            debug!("focused component left the canvas");
            self.blur();
            return false;
        }
        let Some((_, component)) = self.focused.clone() else {
            return false;
        };

        match component.try_borrow_mut() {
            Ok(mut component) => {
                component.handle_key(key);
                true
            }
            Err(_) => {
                warn!(key = %key, "focused component is busy, key dropped");
                false
            }
        }
    }
}

impl std::fmt::Debug for FocusCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusCoordinator")
            .field("focused_z", &self.focused_z())
            .finish()
    }
}

/// Current z-index of `component` on `canvas`, compared by identity.
fn locate(canvas: &Canvas, component: &SharedComponent) -> Option<i32> {
    canvas
        .iter()
        .find(|(_, candidate)| Rc::ptr_eq(candidate, component))
        .map(|(z, _)| z)
}

fn set_focus(component: &SharedComponent, focused: bool) {
    match component.try_borrow_mut() {
        Ok(mut component) => {
            component.set_focus(focused);
        }
        Err(_) => warn!(focused, "component is busy, focus flag not updated"),
    }
}
