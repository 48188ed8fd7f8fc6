//! Error type shared by the canvas, input and configuration layers.

use std::io;
use thiserror::Error;

/// Errors raised by shell-canvas.
///
/// Geometry never fails: out-of-bounds components are clipped or skipped, and
/// operations on missing z-indices are silent no-ops.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Writing a frame or reading a key failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Appending a component when the highest z-index is already `i32::MAX`
    #[error("no z-index left above {0}")]
    ZIndexOverflow(i32),

    /// The key reader has no more input
    #[error("input closed")]
    InputClosed,

    /// Malformed configuration file
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Border preset name not in the catalog
    #[error("unknown border style: {0}")]
    UnknownBorder(String),

    /// Color name the output sink does not understand
    #[error("unknown color: {0}")]
    UnknownColor(String),
}

/// Result alias with [`CanvasError`].
pub type Result<T> = std::result::Result<T, CanvasError>;

impl From<toml::de::Error> for CanvasError {
    fn from(err: toml::de::Error) -> Self {
        CanvasError::Config(err.to_string())
    }
}
