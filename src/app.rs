//! App - Interactive driver tying a canvas to keyboard input
//!
//! [`Gui`] owns a [`Canvas`], a [`FocusCoordinator`], a [`KeyReader`] and an
//! [`OutputSink`]. Each [`Gui::step`] reads one key and handles it:
//!
//! - Tab moves focus forward, Shift+Tab backward
//! - the quit key (Ctrl+Q unless changed) ends the loop
//! - any other key goes to the focused component
//!
//! The frame is redrawn after every handled key.
//!
//! # Example
//!
//! ```
//! use shell_canvas::{shared, BufferSink, Button, Canvas, Gui, KeyPress, ScriptedKeyReader, ZIndex};
//! use shell_canvas::input::keys;
//!
//! let mut canvas = Canvas::new(12, 3);
//! canvas.add(shared(Button::new((0, 0), "OK")), ZIndex::Append).unwrap();
//!
//! let script = ScriptedKeyReader::new([KeyPress::new(keys::TAB), KeyPress::new(keys::CTRL_Q)]);
//! let mut gui = Gui::new(canvas, script, BufferSink::new());
//! gui.run().unwrap();
//!
//! assert_eq!(gui.focus().focused_z(), Some(0));
//! assert_eq!(gui.sink().len(), 2); // initial frame + one redraw
//! ```

use tracing::{debug, info};

use crate::canvas::{Canvas, DrawOptions};
use crate::error::{CanvasError, Result};
use crate::focus::FocusCoordinator;
use crate::input::{keys, KeyPress, KeyReader};
use crate::output::OutputSink;

/// What the driver loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Canvas plus focus, input and output.
#[derive(Debug)]
pub struct Gui<R: KeyReader, S: OutputSink> {
    canvas: Canvas,
    focus: FocusCoordinator,
    reader: R,
    sink: S,
    options: DrawOptions,
    quit_key: KeyPress,
    last_key: Option<KeyPress>,
}

impl<R: KeyReader, S: OutputSink> Gui<R, S> {
    pub fn new(canvas: Canvas, reader: R, sink: S) -> Self {
        Self {
            canvas,
            focus: FocusCoordinator::new(),
            reader,
            sink,
            options: DrawOptions::default(),
            quit_key: KeyPress::new(keys::CTRL_Q),
            last_key: None,
        }
    }

    /// Options used for every draw.
    pub fn with_options(mut self, options: DrawOptions) -> Self {
        self.options = options;
        self
    }

    /// Key that ends [`run`](Self::run).
    pub fn with_quit_key(mut self, key: KeyPress) -> Self {
        self.quit_key = key;
        self
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn focus(&self) -> &FocusCoordinator {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusCoordinator {
        &mut self.focus
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// Most recent key read.
    pub fn last_key(&self) -> Option<KeyPress> {
        self.last_key
    }

    /// Draw the canvas once.
    pub fn draw(&mut self) -> Result<()> {
        self.canvas.draw(&mut self.sink, &self.options)
    }

    /// Read and handle one key.
    pub fn step(&mut self) -> Result<Step> {
        let key = self.reader.read_key()?;
        self.last_key = Some(key);

        if key == self.quit_key {
            debug!(key = %key, "quit requested");
            return Ok(Step::Quit);
        }

        if key.is_tab() {
            self.focus.focus_next(&self.canvas);
        } else if key.is_back_tab() {
            self.focus.focus_prev(&self.canvas);
        } else {
            self.focus.on_key(&self.canvas, &key);
        }

        self.draw()?;
        Ok(Step::Continue)
    }

    /// Draw, then handle keys until the quit key or the end of input.
    pub fn run(&mut self) -> Result<()> {
        self.draw()?;
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(CanvasError::InputClosed) => {
                    info!("input closed");
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Give back the parts.
    pub fn into_parts(self) -> (Canvas, R, S) {
        (self.canvas, self.reader, self.sink)
    }
}
