// Canvas configuration
//
// A TOML file describes the canvas and how it is drawn. Every key is optional;
// missing keys take the defaults below.
//
//   width = 40
//   height = 10
//   border = "thin"        # any preset name, see border::preset_names()
//   color = "green"        # default, black, red, orange, green, blue, purple, brown, error
//   hide_overflown = false
//   delay_ms = 0

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::border::{preset, BorderStyle};
use crate::canvas::{Canvas, DrawOptions};
use crate::error::{CanvasError, Result};
use crate::output::ColorName;

/// Canvas settings loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u16,
    pub height: u16,
    /// Border preset name
    pub border: String,
    /// Frame color name
    pub color: String,
    pub hide_overflown: bool,
    /// Pause before each draw, in milliseconds
    pub delay_ms: u64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            border: "block".to_string(),
            color: ColorName::Default.as_str().to_string(),
            hide_overflown: false,
            delay_ms: 0,
        }
    }
}

impl CanvasConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|err| match err {
                CanvasError::Config(msg) => CanvasError::Config(format!("{}: {msg}", path.display())),
                other => other,
            })
    }

    /// Check that the border and color names are known.
    pub fn validate(&self) -> Result<()> {
        self.border_style()?;
        self.color_name()?;
        Ok(())
    }

    pub fn border_style(&self) -> Result<BorderStyle> {
        preset(&self.border).ok_or_else(|| CanvasError::UnknownBorder(self.border.clone()))
    }

    pub fn color_name(&self) -> Result<ColorName> {
        self.color.parse()
    }

    /// An empty canvas with the configured size and border.
    pub fn build_canvas(&self) -> Result<Canvas> {
        Ok(Canvas::new(self.width, self.height).with_border(self.border_style()?))
    }

    /// Draw options with the configured color, overflow policy and delay.
    pub fn draw_options(&self) -> Result<DrawOptions> {
        Ok(DrawOptions::new()
            .with_color(self.color_name()?)
            .with_hide_overflown(self.hide_overflown)
            .with_delay(Duration::from_millis(self.delay_ms)))
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# shell-canvas configuration

width = {width}
height = {height}

# Border preset: {presets}
border = "{border}"

# Frame color: default, black, red, orange, green, blue, purple, brown, error
color = "{color}"

# Skip components that do not fit instead of clipping them
hide_overflown = {hide}

# Pause before each draw (milliseconds)
delay_ms = {delay}
"#,
            width = self.width,
            height = self.height,
            presets = crate::border::preset_names().collect::<Vec<_>>().join(", "),
            border = self.border,
            color = self.color,
            hide = self.hide_overflown,
            delay = self.delay_ms,
        )
    }
}
