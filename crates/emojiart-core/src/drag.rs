//! Drag sources and drop decisions.

use crate::canvas::EmojiId;
use serde::{Deserialize, Serialize};

/// Whether a dragged item may be dropped at the queried position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragState {
    Accepted,
    Rejected,
}

impl DragState {
    pub fn is_accepted(self) -> bool {
        self == DragState::Accepted
    }
}

/// An item the host is dragging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Dragged {
    /// A glyph picked up from the palette; dropping it places a new emoji.
    PaletteGlyph(String),
    /// An emoji already on the canvas; dropping it moves that emoji.
    CanvasEmoji(EmojiId),
}

/// Result of dropping a [`Dragged`] item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A palette glyph was placed as a new emoji.
    Added(EmojiId),
    /// A canvas emoji was moved.
    Moved(EmojiId),
    /// The drop position is outside the canvas.
    Rejected,
}

impl DropOutcome {
    /// Whether the host should treat the dragged source as consumed.
    ///
    /// Palette glyphs are copied onto the canvas and stay in the palette, so
    /// only a move consumes its source.
    pub fn consumes_source(self) -> bool {
        matches!(self, DropOutcome::Moved(_))
    }

    /// The emoji created or moved by the drop.
    pub fn emoji_id(self) -> Option<EmojiId> {
        match self {
            DropOutcome::Added(id) | DropOutcome::Moved(id) => Some(id),
            DropOutcome::Rejected => None,
        }
    }
}
