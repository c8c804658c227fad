//! Canvas model: dimensions, drop area and the placed emojis.

use crate::error::{EditorError, EditorResult};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an emoji placed on a canvas.
///
/// Ids are handed out by [`EmojiArtCanvas::add_emoji`] in increasing order
/// starting at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmojiId(u64);

impl EmojiId {
    /// The raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmojiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An emoji placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    id: EmojiId,
    text: String,
    /// Horizontal offset from the canvas center, in un-zoomed canvas units.
    pub x: f64,
    /// Vertical offset from the canvas center, in un-zoomed canvas units.
    pub y: f64,
    pub size: i32,
}

impl Emoji {
    pub fn id(&self) -> EmojiId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset from the canvas center as a point.
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// On-screen rectangle of the canvas, as reported by the host layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DropArea {
    /// The host has not laid the canvas out yet.
    #[default]
    NotLaidOut,
    LaidOut(Rect),
}

impl DropArea {
    /// The laid-out rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            DropArea::NotLaidOut => None,
            DropArea::LaidOut(rect) => Some(*rect),
        }
    }

    pub fn is_laid_out(&self) -> bool {
        matches!(self, DropArea::LaidOut(_))
    }
}

/// The emoji art canvas.
///
/// Emojis are kept in insertion order, which is also their z-order
/// (back to front).
#[derive(Debug, Clone)]
pub struct EmojiArtCanvas {
    width: f64,
    height: f64,
    drop_area: DropArea,
    emojis: Vec<Emoji>,
    /// Last id handed out; 0 means none yet.
    last_id: u64,
}

impl EmojiArtCanvas {
    /// Create an empty canvas with the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            drop_area: DropArea::NotLaidOut,
            emojis: Vec::new(),
            last_id: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Emojis in z-order (back to front).
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    /// Get an emoji by ID.
    pub fn emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.iter().find(|emoji| emoji.id == id)
    }

    /// Get the number of emojis.
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Check if the canvas has no emojis.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Place a new emoji at `location` (offset from the canvas center).
    ///
    /// Text, location and size are stored as given.
    pub fn add_emoji(&mut self, text: impl Into<String>, location: Point, size: i32) -> EmojiId {
        self.last_id += 1;
        let id = EmojiId(self.last_id);
        self.emojis.push(Emoji {
            id,
            text: text.into(),
            x: location.x,
            y: location.y,
            size,
        });
        log::debug!("Added emoji {} at ({}, {}) size {}", id, location.x, location.y, size);
        id
    }

    /// Move and resize an existing emoji.
    ///
    /// Callers are expected to only pass ids they obtained from this canvas;
    /// an unknown id is a contract violation and reported as
    /// [`EditorError::EmojiNotFound`].
    pub fn update_emoji(&mut self, id: EmojiId, location: Point, size: i32) -> EditorResult<()> {
        let Some(emoji) = self.emojis.iter_mut().find(|emoji| emoji.id == id) else {
            log::error!("Update of unknown emoji {}", id);
            return Err(EditorError::EmojiNotFound(id));
        };
        emoji.x = location.x;
        emoji.y = location.y;
        emoji.size = size;
        log::debug!("Updated emoji {} to ({}, {}) size {}", id, location.x, location.y, size);
        Ok(())
    }

    /// Set or replace the on-screen drop area.
    pub fn update_drop_area(&mut self, rect: Rect) {
        self.drop_area = DropArea::LaidOut(rect);
    }

    /// Current layout state of the drop area.
    pub fn drop_area_state(&self) -> DropArea {
        self.drop_area
    }

    /// The laid-out drop area.
    ///
    /// Returns [`EditorError::NotLaidOut`] until [`update_drop_area`](Self::update_drop_area)
    /// has been called.
    pub fn drop_area(&self) -> EditorResult<Rect> {
        self.drop_area.rect().ok_or(EditorError::NotLaidOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_creation() {
        let canvas = EmojiArtCanvas::new(300.0, 200.0);
        assert!(canvas.is_empty());
        assert!((canvas.width() - 300.0).abs() < f64::EPSILON);
        assert!((canvas.height() - 200.0).abs() < f64::EPSILON);
        assert!(!canvas.drop_area_state().is_laid_out());
    }

    #[test]
    fn test_add_emoji() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        let id = canvas.add_emoji("🐶", Point::ZERO, 10);

        assert_eq!(canvas.len(), 1);
        assert_eq!(id.get(), 1);
        let emoji = canvas.emoji(id).unwrap();
        assert_eq!(emoji.text(), "🐶");
        assert_eq!(emoji.location(), Point::ZERO);
        assert_eq!(emoji.size, 10);
    }

    #[test]
    fn test_ids_increase() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        let a = canvas.add_emoji("🐶", Point::ZERO, 10);
        let b = canvas.add_emoji("🐱", Point::ZERO, 10);
        let c = canvas.add_emoji("🐶", Point::ZERO, 10);
        assert!(a < b && b < c);
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn test_insertion_order() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        canvas.add_emoji("🐶", Point::ZERO, 10);
        canvas.add_emoji("🐱", Point::ZERO, 10);
        let texts: Vec<_> = canvas.emojis().iter().map(Emoji::text).collect();
        assert_eq!(texts, ["🐶", "🐱"]);
    }

    #[test]
    fn test_update_emoji() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        let id = canvas.add_emoji("🐶", Point::ZERO, 10);
        let other = canvas.add_emoji("🐱", Point::new(1.0, 2.0), 12);

        canvas.update_emoji(id, Point::new(5.0, -5.0), 20).unwrap();

        let emoji = canvas.emoji(id).unwrap();
        assert_eq!(emoji.id(), id);
        assert_eq!(emoji.text(), "🐶");
        assert!((emoji.x - 5.0).abs() < f64::EPSILON);
        assert!((emoji.y + 5.0).abs() < f64::EPSILON);
        assert_eq!(emoji.size, 20);

        let untouched = canvas.emoji(other).unwrap();
        assert_eq!(untouched.location(), Point::new(1.0, 2.0));
        assert_eq!(untouched.size, 12);
    }

    #[test]
    fn test_update_unknown_emoji() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        canvas.add_emoji("🐶", Point::ZERO, 10);
        let result = canvas.update_emoji(EmojiId(42), Point::ZERO, 10);
        assert!(matches!(result, Err(EditorError::EmojiNotFound(id)) if id.get() == 42));
    }

    #[test]
    fn test_drop_area() {
        let mut canvas = EmojiArtCanvas::new(300.0, 200.0);
        assert!(matches!(canvas.drop_area(), Err(EditorError::NotLaidOut)));

        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
        canvas.update_drop_area(rect);
        assert_eq!(canvas.drop_area().unwrap(), rect);

        let moved = Rect::new(10.0, 10.0, 310.0, 210.0);
        canvas.update_drop_area(moved);
        assert_eq!(canvas.drop_area_state(), DropArea::LaidOut(moved));
    }
}
