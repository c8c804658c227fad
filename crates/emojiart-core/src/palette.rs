//! Palette of emoji glyphs that can be dragged onto the canvas.

use crate::drag::Dragged;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation as _;

/// Glyphs offered by the default palette.
pub const DEFAULT_PALETTE: &str = "🐶🐱🐭🐹🐼🐻🦊🐸🐯🐨🐮🐷🐵";

/// A fixed string of candidate glyphs.
///
/// Each extended grapheme cluster is one glyph, so emoji built from several
/// code points (skin tones, ZWJ sequences, flags) stay whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    glyphs: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl Palette {
    pub fn new(glyphs: impl Into<String>) -> Self {
        Self {
            glyphs: glyphs.into(),
        }
    }

    /// The palette as one string.
    pub fn as_str(&self) -> &str {
        &self.glyphs
    }

    /// Individual glyphs in palette order.
    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.glyphs.graphemes(true)
    }

    /// Glyphs as draggable source items.
    pub fn draggables(&self) -> impl Iterator<Item = Dragged> + '_ {
        self.glyphs().map(|glyph| Dragged::PaletteGlyph(glyph.to_string()))
    }

    pub fn len(&self) -> usize {
        self.glyphs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Check if `glyph` is one of the palette's glyphs.
    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs().any(|g| g == glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 13);
        assert_eq!(palette.glyphs().next(), Some("🐶"));
        assert_eq!(palette.glyphs().last(), Some("🐵"));
        assert!(palette.contains("🦊"));
        assert!(!palette.contains("🐶🐱"));
    }

    #[test]
    fn test_grapheme_clusters_stay_whole() {
        // Thumbs up with skin tone, family ZWJ sequence, and a flag.
        let palette = Palette::new("👍🏽👨‍👩‍👧🇫🇷");
        let glyphs: Vec<_> = palette.glyphs().collect();
        assert_eq!(glyphs, ["👍🏽", "👨‍👩‍👧", "🇫🇷"]);
    }

    #[test]
    fn test_empty_palette() {
        let palette = Palette::new("");
        assert!(palette.is_empty());
        assert_eq!(palette.draggables().count(), 0);
    }

    #[test]
    fn test_draggables() {
        let palette = Palette::new("🐶🐱");
        let items: Vec<_> = palette.draggables().collect();
        assert_eq!(
            items,
            [
                Dragged::PaletteGlyph("🐶".to_string()),
                Dragged::PaletteGlyph("🐱".to_string()),
            ]
        );
    }
}
