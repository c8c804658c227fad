//! Emoji art document: the view-model between the host UI and the canvas.

use crate::canvas::{DropArea, Emoji, EmojiArtCanvas, EmojiId};
use crate::config::EditorConfig;
use crate::coords;
use crate::drag::{DragState, Dragged, DropOutcome};
use crate::error::EditorResult;
use crate::observer::{CanvasChange, ChangeNotifier, SubscriptionId};
use crate::palette::Palette;
use kurbo::{Point, Rect};

/// Owns the canvas and translates host input into canvas edits.
///
/// The host reports screen positions (drag moves, drops), the on-screen
/// rectangle of the canvas and the zoom scale. The document decides whether
/// a position can take a drop and converts accepted positions into
/// canvas-offset coordinates before touching the canvas. Every successful
/// mutation is announced to subscribers.
#[derive(Debug)]
pub struct EmojiArtDocument {
    canvas: EmojiArtCanvas,
    zoom_scale: f64,
    palette: Palette,
    default_emoji_size: i32,
    notifier: ChangeNotifier,
}

impl Default for EmojiArtDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiArtDocument {
    /// Create a document with the default 300 x 200 canvas and palette.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create a document from a configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        log::debug!(
            "Creating document with {}x{} canvas",
            config.canvas_width,
            config.canvas_height
        );
        Self {
            canvas: EmojiArtCanvas::new(config.canvas_width, config.canvas_height),
            zoom_scale: 1.0,
            palette: config.palette,
            default_emoji_size: config.default_emoji_size,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn canvas(&self) -> &EmojiArtCanvas {
        &self.canvas
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas.width()
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas.height()
    }

    /// Emojis in z-order (back to front).
    pub fn emojis(&self) -> &[Emoji] {
        self.canvas.emojis()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn default_emoji_size(&self) -> i32 {
        self.default_emoji_size
    }

    /// The laid-out canvas rectangle, or [`EditorError::NotLaidOut`](crate::EditorError::NotLaidOut).
    pub fn drop_area(&self) -> EditorResult<Rect> {
        self.canvas.drop_area()
    }

    pub fn drop_area_state(&self) -> DropArea {
        self.canvas.drop_area_state()
    }

    /// Record the on-screen rectangle of the canvas after host layout.
    pub fn set_drop_area(&mut self, rect: Rect) {
        self.canvas.update_drop_area(rect);
        self.notifier.notify(CanvasChange::DropAreaChanged(rect));
    }

    /// Store the combined zoom scale (steady-state times gesture).
    pub fn set_zoom_scale(&mut self, zoom: f64) {
        log::debug!("Zoom scale {} -> {}", self.zoom_scale, zoom);
        self.zoom_scale = zoom;
        self.notifier.notify(CanvasChange::ZoomChanged(zoom));
    }

    /// Decide whether a drop at `point` (screen space) lands on the canvas.
    ///
    /// The canvas bounds are the canvas size scaled by the zoom, centered on
    /// the drop area's center. Edges count as inside.
    pub fn drag_state(&self, point: Point) -> EditorResult<DragState> {
        let area = self.canvas.drop_area()?;
        // The drop area's center expressed relative to itself, i.e. the origin.
        let center = coords::to_canvas_offset(area.center(), area);
        let half_width = self.canvas.width() / 2.0 * self.zoom_scale;
        let half_height = self.canvas.height() / 2.0 * self.zoom_scale;
        let x_bounds = (center.x - half_width)..=(center.x + half_width);
        let y_bounds = (center.y - half_height)..=(center.y + half_height);

        let offset = coords::to_canvas_offset(point, area);
        let state = if x_bounds.contains(&offset.x) && y_bounds.contains(&offset.y) {
            DragState::Accepted
        } else {
            DragState::Rejected
        };
        log::trace!("Drag at ({}, {}): {:?}", point.x, point.y, state);
        Ok(state)
    }

    /// Convert a screen point to un-zoomed canvas-offset coordinates.
    fn canvas_location(&self, point: Point) -> EditorResult<Point> {
        let area = self.canvas.drop_area()?;
        let offset = coords::to_canvas_offset(point, area) / self.zoom_scale;
        Ok(offset.to_point())
    }

    /// Place a new emoji at the screen position `point`.
    pub fn add_emoji(&mut self, text: impl Into<String>, point: Point, size: i32) -> EditorResult<EmojiId> {
        let location = self.canvas_location(point)?;
        let id = self.canvas.add_emoji(text, location, size);
        self.notifier.notify(CanvasChange::EmojiAdded(id));
        Ok(id)
    }

    /// Move an existing emoji to the screen position `point` and resize it.
    pub fn update_emoji(&mut self, id: EmojiId, point: Point, size: i32) -> EditorResult<()> {
        let location = self.canvas_location(point)?;
        self.canvas.update_emoji(id, location, size)?;
        self.notifier.notify(CanvasChange::EmojiUpdated(id));
        Ok(())
    }

    /// Handle the host dropping `dragged` at the screen position `point`.
    ///
    /// Accepted palette glyphs become new emojis and accepted canvas emojis
    /// are moved; both get the configured default size.
    pub fn drop_object(&mut self, dragged: Dragged, point: Point) -> EditorResult<DropOutcome> {
        if !self.drag_state(point)?.is_accepted() {
            if let Dragged::CanvasEmoji(id) = dragged {
                log::warn!("Emoji {} dropped outside the canvas", id);
            }
            return Ok(DropOutcome::Rejected);
        }

        let size = self.default_emoji_size;
        match dragged {
            Dragged::PaletteGlyph(glyph) => {
                let id = self.add_emoji(glyph, point, size)?;
                Ok(DropOutcome::Added(id))
            }
            Dragged::CanvasEmoji(id) => {
                self.update_emoji(id, point, size)?;
                Ok(DropOutcome::Moved(id))
            }
        }
    }

    /// Screen position at which `emoji` is drawn at the current zoom.
    pub fn screen_position(&self, emoji: &Emoji) -> EditorResult<Point> {
        let area = self.canvas.drop_area()?;
        Ok(coords::from_canvas_offset(
            emoji.location().to_vec2(),
            area,
            self.zoom_scale,
        ))
    }

    /// Register a callback run after every change to the document.
    pub fn subscribe(&mut self, callback: impl FnMut(&CanvasChange) + 'static) -> SubscriptionId {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
