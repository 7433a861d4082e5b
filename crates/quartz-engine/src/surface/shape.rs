use tiny_skia::{Path, PathBuilder};

use crate::coords::Vec2;

/// Geometry accepted by [`Surface`](super::Surface) draw calls.
///
/// Degenerate shapes (non-positive radius, fewer than three polygon points,
/// zero-area rects) produce no path and are skipped by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// Implicitly closed polygon.
    Polygon(Vec<Vec2>),
    /// Open line segment; only meaningful when stroked.
    Segment { from: Vec2, to: Vec2 },
    Rect { origin: Vec2, size: Vec2 },
}

impl Shape {
    #[inline]
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Shape::Circle { center, radius }
    }

    #[inline]
    pub fn polygon(points: impl IntoIterator<Item = Vec2>) -> Self {
        Shape::Polygon(points.into_iter().collect())
    }

    #[inline]
    pub fn segment(from: Vec2, to: Vec2) -> Self {
        Shape::Segment { from, to }
    }

    #[inline]
    pub fn rect(origin: Vec2, size: Vec2) -> Self {
        Shape::Rect { origin, size }
    }

    pub(crate) fn to_path(&self) -> Option<Path> {
        match self {
            Shape::Circle { center, radius } => {
                if radius.is_nan() || *radius <= 0.0 || !center.is_finite() {
                    return None;
                }
                PathBuilder::from_circle(center.x, center.y, *radius)
            }
            Shape::Polygon(points) => {
                if points.len() < 3 {
                    return None;
                }
                let mut pb = PathBuilder::new();
                pb.move_to(points[0].x, points[0].y);
                for p in &points[1..] {
                    pb.line_to(p.x, p.y);
                }
                pb.close();
                pb.finish()
            }
            Shape::Segment { from, to } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.x, from.y);
                pb.line_to(to.x, to.y);
                pb.finish()
            }
            Shape::Rect { origin, size } => {
                if size.x.is_nan()
                    || size.y.is_nan()
                    || size.x <= 0.0
                    || size.y <= 0.0
                    || !origin.is_finite()
                {
                    return None;
                }
                tiny_skia::Rect::from_xywh(origin.x, origin.y, size.x, size.y)
                    .map(PathBuilder::from_rect)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_and_segment_build_paths() {
        assert!(Shape::circle(Vec2::new(50.0, 40.0), 10.0).to_path().is_some());
        assert!(Shape::segment(Vec2::zero(), Vec2::new(3.0, 4.0)).to_path().is_some());
    }

    #[test]
    fn degenerate_shapes_have_no_path() {
        assert!(Shape::circle(Vec2::zero(), 0.0).to_path().is_none());
        assert!(Shape::circle(Vec2::zero(), f32::NAN).to_path().is_none());
        assert!(Shape::polygon([Vec2::zero(), Vec2::new(1.0, 1.0)]).to_path().is_none());
        assert!(Shape::rect(Vec2::zero(), Vec2::new(0.0, 10.0)).to_path().is_none());
        assert!(Shape::rect(Vec2::zero(), Vec2::new(10.0, -1.0)).to_path().is_none());
        assert!(Shape::rect(Vec2::new(f32::NAN, 0.0), Vec2::new(4.0, 4.0)).to_path().is_none());
    }

    #[test]
    fn positive_rect_builds_path() {
        let b = Shape::rect(Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0)).to_path().unwrap().bounds();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (2.0, 3.0, 6.0, 8.0));
    }

    #[test]
    fn polygon_path_covers_all_points() {
        let shape = Shape::polygon([
            Vec2::new(-3.0, 40.0),
            Vec2::new(3.0, 40.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(-5.0, 0.0),
        ]);
        let b = shape.to_path().unwrap().bounds();
        assert_eq!((b.left(), b.right()), (-5.0, 5.0));
        assert_eq!((b.top(), b.bottom()), (0.0, 40.0));
    }
}
