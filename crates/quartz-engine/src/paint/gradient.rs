use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; colors outside the first/last stop are padded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in surface pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Out-of-range positions clamp to the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    pub(crate) fn to_shader(&self) -> Option<tiny_skia::Shader<'static>> {
        if !self.is_valid() {
            log::debug!("skipping degenerate linear gradient");
            return None;
        }
        let stops = self
            .stops
            .iter()
            .map(|s| tiny_skia::GradientStop::new(s.t, s.color.to_skia()))
            .collect();
        tiny_skia::LinearGradient::new(
            tiny_skia::Point::from_xy(self.start.x, self.start.y),
            tiny_skia::Point::from_xy(self.end.x, self.end.y),
            stops,
            tiny_skia::SpreadMode::Pad,
            tiny_skia::Transform::identity(),
        )
    }
}
