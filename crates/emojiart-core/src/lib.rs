//! Emoji Art Core Library
//!
//! Toolkit-independent model and view-model for a drag-and-drop emoji art
//! canvas: glyphs are dragged from a palette onto a zoomable canvas, then
//! moved and resized there. Rendering and gesture recognition belong to the
//! host UI.

pub mod canvas;
pub mod config;
pub mod coords;
pub mod document;
pub mod drag;
pub mod error;
pub mod observer;
pub mod palette;
pub mod zoom;

pub use canvas::{DropArea, Emoji, EmojiArtCanvas, EmojiId};
pub use config::EditorConfig;
pub use document::EmojiArtDocument;
pub use drag::{DragState, Dragged, DropOutcome};
pub use error::{EditorError, EditorResult};
pub use observer::{CanvasChange, ChangeNotifier, SubscriptionId};
pub use palette::{DEFAULT_PALETTE, Palette};
pub use zoom::ZoomScale;
