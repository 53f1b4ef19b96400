//! Pure geometry: mapping a drag's endpoints to concrete shapes.

use crate::modes::DrawingMode;
use crate::shapes::{Circle, Line, Rectangle, Shape, Text};
use kurbo::Point;

/// Minimum drag extent, in canvas units, below which a finalized shape is
/// discarded. Keeps a stray click from committing a degenerate shape.
pub const MIN_DRAG_EXTENT: f64 = 5.0;

/// Rectangle spanning the dragged corners, anchored at the minimum corner.
pub fn rectangle_from_drag(start: Point, current: Point) -> Rectangle {
    Rectangle::from_corners(start, current)
}

/// Circle centered on the drag start whose radius is half the distance
/// dragged. The drag distance is the diameter, not the radius.
pub fn circle_from_drag(start: Point, current: Point) -> Circle {
    Circle::new(start, start.distance(current) / 2.0)
}

/// Raw segment between the dragged endpoints, no normalization.
pub fn line_from_drag(start: Point, current: Point) -> Line {
    Line::new(start, current)
}

/// Text object at the click point with the placeholder content and default
/// font.
pub fn text_at(point: Point) -> Text {
    Text::placeholder(point)
}

/// Map a drag to the shape its mode creates. Select never creates, and text
/// is placed on pointer-down rather than dragged.
pub fn shape_from_drag(mode: DrawingMode, start: Point, current: Point) -> Option<Shape> {
    match mode {
        DrawingMode::Rectangle => Some(Shape::Rectangle(rectangle_from_drag(start, current))),
        DrawingMode::Circle => Some(Shape::Circle(circle_from_drag(start, current))),
        DrawingMode::Line => Some(Shape::Line(line_from_drag(start, current))),
        DrawingMode::Select | DrawingMode::Text => None,
    }
}

/// The minimum-size policy, applied at finalization only.
///
/// A rectangle or circle degenerates when either axis collapses, so both
/// extents must clear the threshold; a line only needs motion in one axis.
pub fn meets_minimum_size(mode: DrawingMode, start: Point, current: Point) -> bool {
    let dx = (current.x - start.x).abs();
    let dy = (current.y - start.y).abs();
    match mode {
        DrawingMode::Rectangle => dx > MIN_DRAG_EXTENT && dy > MIN_DRAG_EXTENT,
        DrawingMode::Circle => start.distance(current) / 2.0 > MIN_DRAG_EXTENT,
        DrawingMode::Line => dx > MIN_DRAG_EXTENT || dy > MIN_DRAG_EXTENT,
        // Never drag-committed
        DrawingMode::Select | DrawingMode::Text => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeTrait;

    #[test]
    fn test_rectangle_anchor_stable() {
        let rect = rectangle_from_drag(Point::new(50.0, 50.0), Point::new(10.0, 80.0));
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 50.0).abs() < f64::EPSILON);
        assert!((rect.width - 40.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);

        let reversed = rectangle_from_drag(Point::new(10.0, 80.0), Point::new(50.0, 50.0));
        assert_eq!(reversed.position, rect.position);
        assert!((reversed.width - rect.width).abs() < f64::EPSILON);
        assert!((reversed.height - rect.height).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_halves_drag_distance() {
        let circle = circle_from_drag(Point::new(100.0, 100.0), Point::new(120.0, 100.0));
        assert_eq!(circle.center, Point::new(100.0, 100.0));
        assert!((circle.radius - 10.0).abs() < f64::EPSILON);

        let bounds = circle.bounds();
        assert!((bounds.x0 - 90.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_line_keeps_raw_endpoints() {
        let line = line_from_drag(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(line.start, Point::new(50.0, 80.0));
        assert_eq!(line.end, Point::new(10.0, 20.0));
    }

    #[test]
    fn test_text_at_defaults() {
        let text = text_at(Point::new(30.0, 40.0));
        assert_eq!(text.position, Point::new(30.0, 40.0));
        assert_eq!(text.content(), Text::PLACEHOLDER);
        assert!((text.font_size - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_from_drag_modes() {
        let start = Point::new(0.0, 0.0);
        let current = Point::new(10.0, 10.0);
        assert!(shape_from_drag(DrawingMode::Rectangle, start, current).is_some());
        assert!(shape_from_drag(DrawingMode::Circle, start, current).is_some());
        assert!(shape_from_drag(DrawingMode::Line, start, current).is_some());
        assert!(shape_from_drag(DrawingMode::Select, start, current).is_none());
        assert!(shape_from_drag(DrawingMode::Text, start, current).is_none());
    }

    #[test]
    fn test_rectangle_needs_both_axes() {
        let start = Point::new(0.0, 0.0);
        assert!(meets_minimum_size(
            DrawingMode::Rectangle,
            start,
            Point::new(6.0, 6.0)
        ));
        // One collapsed axis fails even with a long drag on the other
        assert!(!meets_minimum_size(
            DrawingMode::Rectangle,
            start,
            Point::new(100.0, 3.0)
        ));
        assert!(!meets_minimum_size(
            DrawingMode::Rectangle,
            start,
            Point::new(5.0, 5.0)
        ));
    }

    #[test]
    fn test_circle_radius_threshold() {
        let start = Point::new(0.0, 0.0);
        // Distance 20 -> radius 10
        assert!(meets_minimum_size(
            DrawingMode::Circle,
            start,
            Point::new(20.0, 0.0)
        ));
        // Distance 10 -> radius 5, not strictly greater than the threshold
        assert!(!meets_minimum_size(
            DrawingMode::Circle,
            start,
            Point::new(10.0, 0.0)
        ));
    }

    #[test]
    fn test_line_needs_one_axis() {
        let start = Point::new(0.0, 0.0);
        // Neither axis exceeds the threshold
        assert!(!meets_minimum_size(
            DrawingMode::Line,
            start,
            Point::new(3.0, 3.0)
        ));
        // Vertical-only motion passes
        assert!(meets_minimum_size(
            DrawingMode::Line,
            start,
            Point::new(0.0, 10.0)
        ));
    }
}
