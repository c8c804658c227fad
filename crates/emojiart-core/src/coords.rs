//! Conversions between screen space and canvas-offset coordinates.
//!
//! Canvas-offset coordinates are measured from the center of a reference
//! rectangle (normally the canvas drop area).

use kurbo::{Point, Rect, Vec2};

/// Offset of a screen point from the center of `rect`.
///
/// This is a pure translation; zoom is not compensated here.
pub fn to_canvas_offset(point: Point, rect: Rect) -> Vec2 {
    point - rect.center()
}

/// Screen position of a canvas offset drawn at `zoom` inside `rect`.
pub fn from_canvas_offset(offset: Vec2, rect: Rect, zoom: f64) -> Point {
    rect.center() + offset * zoom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_origin() {
        let rect = Rect::new(20.0, 40.0, 320.0, 240.0);
        let offset = to_canvas_offset(rect.center(), rect);
        assert!(offset.x.abs() < f64::EPSILON);
        assert!(offset.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_translation() {
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
        let offset = to_canvas_offset(Point::new(160.0, 80.0), rect);
        assert!((offset.x - 10.0).abs() < f64::EPSILON);
        assert!((offset.y + 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_offset_applies_zoom() {
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);
        let screen = from_canvas_offset(Vec2::new(10.0, -20.0), rect, 2.0);
        assert!((screen.x - 170.0).abs() < f64::EPSILON);
        assert!((screen.y - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let rect = Rect::new(-30.0, 15.0, 270.0, 215.0);
        let zoom = 1.5;
        let original = Point::new(123.0, 45.0);

        let offset = to_canvas_offset(original, rect) / zoom;
        let back = from_canvas_offset(offset, rect, zoom);

        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }
}
