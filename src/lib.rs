//! # shell-canvas
//!
//! ASCII canvas compositor for terminal UIs.
//!
//! ## Architecture
//!
//! A [`Canvas`] is a fixed-size character grid. Components render themselves to
//! rectangular multi-line text blocks; the canvas stamps those blocks into a
//! fresh frame buffer in ascending z-index order, wraps the result in a border
//! and writes it to an output sink.
//!
//! ```text
//! Component::render → Canvas::compose (FrameBuffer) → apply_border → OutputSink::write
//! ```
//!
//! There is no diffing: every draw rebuilds the frame from scratch.
//!
//! ## Modules
//!
//! - [`types`] - Geometry (Position, Size, ZIndex)
//! - [`border`] - Border styles, preset catalog, border renderer
//! - [`events`] - Synchronous publish/subscribe listeners
//! - [`component`] - Component trait, Label and Button
//! - [`canvas`] - The compositor and its frame buffer
//! - [`output`] - Output sinks and named colors
//! - [`input`] - Key press events and key readers
//! - [`focus`] - Focus tracking and key routing
//! - [`app`] - Read-route-redraw driver
//! - [`config`] - TOML canvas configuration

pub mod app;
pub mod border;
pub mod canvas;
pub mod component;
pub mod config;
pub mod error;
pub mod events;
pub mod focus;
pub mod input;
pub mod output;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{CanvasError, Result};

pub use border::{apply_border, preset, preset_names, BorderSides, BorderStyle};

pub use events::{Listener, Subscriber, SubscriberId};

pub use component::{
    renders_equal, shared, truncate_with_indicator, Button, Component, ComponentCore,
    ComponentId, FocusChange, Label, SharedComponent,
};

pub use canvas::{Canvas, DrawOptions, FrameBuffer};

pub use output::{BufferSink, ColorName, OutputSink, TerminalSink};

pub use input::{
    keys, ChannelKeyReader, CrosstermKeyReader, KeyPress, KeyReader, ScriptedKeyReader,
};

pub use focus::FocusCoordinator;

pub use app::{Gui, Step};

pub use config::CanvasConfig;
