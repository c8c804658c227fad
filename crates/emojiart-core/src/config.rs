//! Editor configuration.

use crate::error::{EditorError, EditorResult};
use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Default canvas width in canvas units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 300.0;
/// Default canvas height in canvas units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 200.0;
/// Size given to emojis placed or moved by a drop.
pub const DEFAULT_EMOJI_SIZE: i32 = 10;
/// Font size the host should use for palette glyphs.
pub const DEFAULT_PALETTE_FONT_SIZE: f64 = 40.0;

/// Settings used to build an [`EmojiArtDocument`](crate::EmojiArtDocument).
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub palette: Palette,
    pub default_emoji_size: i32,
    pub palette_font_size: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            palette: Palette::default(),
            default_emoji_size: DEFAULT_EMOJI_SIZE,
            palette_font_size: DEFAULT_PALETTE_FONT_SIZE,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the canvas dimensions are usable.
    pub fn validate(&self) -> EditorResult<()> {
        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EditorError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
