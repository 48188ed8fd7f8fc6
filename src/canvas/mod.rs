//! Canvas - Z-ordered compositing into a fixed-size frame
//!
//! A [`Canvas`] owns a set of components keyed by z-index. Every draw builds a
//! fresh [`FrameBuffer`], stamps each component's rendered block into it in
//! ascending z order (higher z wins on overlap), decorates the joined frame
//! with the canvas border and writes it to an [`OutputSink`].
//!
//! # Placement rules
//!
//! - Rows outside `[0, height)` and columns left of 0 are clipped.
//! - A component anchored at or beyond both the right and bottom edges is
//!   skipped.
//! - With `hide_overflown`, a component whose block does not fit entirely is
//!   skipped instead of clipped.
//!
//! # Example
//!
//! ```
//! use shell_canvas::{shared, BorderStyle, Canvas, DrawOptions, Label, ZIndex};
//!
//! let mut canvas = Canvas::new(10, 3).with_border(BorderStyle::NONE);
//! canvas.add(shared(Label::new((2, 1), "hi")), ZIndex::Append).unwrap();
//!
//! let frame = canvas.render_frame(&DrawOptions::default());
//! assert_eq!(frame, "          \n  hi      \n          ");
//! ```

mod frame;

pub use frame::FrameBuffer;

use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::border::{apply_border, BorderStyle};
use crate::component::SharedComponent;
use crate::error::{CanvasError, Result};
use crate::output::{ColorName, OutputSink};
use crate::types::{line_width, ZIndex};

// =============================================================================
// DrawOptions
// =============================================================================

/// Per-draw settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawOptions {
    /// Pause before rendering, for animation pacing.
    pub delay: Duration,
    /// Skip components that do not fit entirely instead of clipping them.
    pub hide_overflown: bool,
    /// Foreground color for the whole frame.
    pub color: ColorName,
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_hide_overflown(mut self, hide: bool) -> Self {
        self.hide_overflown = hide;
        self
    }

    pub fn with_color(mut self, color: ColorName) -> Self {
        self.color = color;
        self
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Fixed-size compositor of z-ordered components.
pub struct Canvas {
    width: u16,
    height: u16,
    border: BorderStyle,
    components: BTreeMap<i32, SharedComponent>,
}

impl Canvas {
    /// Create an empty canvas with the `block` border.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            border: BorderStyle::BLOCK,
            components: BTreeMap::new(),
        }
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub fn border(&self) -> BorderStyle {
        self.border
    }

    pub fn set_border(&mut self, border: BorderStyle) {
        self.border = border;
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component at `z`.
    pub fn get(&self, z: i32) -> Option<&SharedComponent> {
        self.components.get(&z)
    }

    /// Occupied z-indices, ascending.
    pub fn z_indices(&self) -> impl Iterator<Item = i32> + '_ {
        self.components.keys().copied()
    }

    /// Components in ascending z order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &SharedComponent)> + '_ {
        self.components.iter().map(|(z, component)| (*z, component))
    }

    // =========================================================================
    // Z-order management
    // =========================================================================

    /// Add a component and return the z-index it was stored at.
    ///
    /// [`ZIndex::Append`] places it one above the current maximum (0 on an
    /// empty canvas). An explicit index replaces whatever was there.
    pub fn add(&mut self, component: SharedComponent, z: impl Into<ZIndex>) -> Result<i32> {
        let z = match z.into() {
            ZIndex::At(z) => z,
            ZIndex::Append => self.next_z()?,
        };

        let replaced = self.components.insert(z, component).is_some();
        debug!(z, replaced, "component added");
        Ok(z)
    }

    fn next_z(&self) -> Result<i32> {
        match self.components.last_key_value() {
            None => Ok(0),
            Some((&max, _)) => max.checked_add(1).ok_or(CanvasError::ZIndexOverflow(max)),
        }
    }

    /// Move the component at `old` to `new`. Missing `old` is a no-op; an
    /// entry already at `new` is replaced.
    pub fn set_z(&mut self, old: i32, new: i32) {
        if let Some(component) = self.components.remove(&old) {
            let replaced = self.components.insert(new, component).is_some();
            debug!(old, new, replaced, "component moved");
        }
    }

    /// Remove and return the component at `z`.
    pub fn remove(&mut self, z: i32) -> Option<SharedComponent> {
        let removed = self.components.remove(&z);
        if removed.is_some() {
            debug!(z, "component removed");
        }
        removed
    }

    // =========================================================================
    // Compositing
    // =========================================================================

    /// Stamp every component into a fresh, unbordered frame.
    pub fn compose(&self, hide_overflown: bool) -> FrameBuffer {
        let mut frame = FrameBuffer::new(self.width, self.height);
        let width = i64::from(self.width);
        let height = i64::from(self.height);

        for (&z, component) in &self.components {
            let Ok(component) = component.try_borrow() else {
                warn!(z, "component is mutably borrowed, skipped");
                continue;
            };
            let position = component.position();
            let rendered = component.render();
            drop(component);

            let lines: Vec<&str> = rendered.split('\n').collect();
            let block_width = lines.iter().map(|line| line_width(line)).max().unwrap_or(0);
            let block_height = lines.len();
            if lines.iter().any(|line| line_width(line) != block_width) {
                warn!(z, "component rendered a non-rectangular block");
            }

            let x = i64::from(position.x);
            let y = i64::from(position.y);

            if hide_overflown
                && (x + block_width as i64 > width || y + block_height as i64 > height)
            {
                trace!(z, x, y, block_width, block_height, "overflowing component hidden");
                continue;
            }
            if x >= width && y >= height {
                trace!(z, x, y, "component outside canvas");
                continue;
            }

            trace!(z, x, y, block_width, block_height, "component stamped");
            frame.stamp(position.x, position.y, lines);
        }

        frame.finish();
        frame
    }

    /// The full bordered frame, without the trailing newline.
    pub fn render_frame(&self, options: &DrawOptions) -> String {
        let frame = self.compose(options.hide_overflown);
        apply_border(&frame.to_string(), &self.border)
    }

    /// Wait `options.delay`, then write one frame plus a newline to `sink`.
    pub fn draw<S: OutputSink + ?Sized>(&self, sink: &mut S, options: &DrawOptions) -> Result<()> {
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }

        let mut frame = self.render_frame(options);
        frame.push('\n');
        sink.write(&frame, options.color, true)?;

        debug!(
            width = self.width,
            height = self.height,
            components = self.components.len(),
            color = %options.color,
            "frame drawn"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("border", &self.border)
            .field("z_indices", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
