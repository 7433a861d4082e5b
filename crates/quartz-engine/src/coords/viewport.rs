/// Viewport size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Uniform scale that fits `content` inside the viewport, preserving aspect.
    ///
    /// Returns `0.0` for an invalid viewport or empty content.
    pub fn fit_scale(self, content_width: f32, content_height: f32) -> f32 {
        if !self.is_valid() || content_width <= 0.0 || content_height <= 0.0 {
            return 0.0;
        }
        (self.width / content_width).min(self.height / content_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scale_limited_by_short_axis() {
        let vp = Viewport::new(800.0, 400.0);
        assert_eq!(vp.fit_scale(400.0, 400.0), 1.0);
        assert_eq!(Viewport::new(400.0, 1000.0).fit_scale(200.0, 200.0), 2.0);
    }

    #[test]
    fn fit_scale_invalid_viewport_is_zero() {
        assert_eq!(Viewport::new(0.0, 400.0).fit_scale(400.0, 400.0), 0.0);
        assert_eq!(Viewport::new(400.0, 400.0).fit_scale(0.0, 400.0), 0.0);
    }
}
