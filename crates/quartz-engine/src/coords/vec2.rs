use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in surface pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point on an axis-aligned ellipse with radii `(rx, ry)` at `angle`.
    ///
    /// `angle = 0` is +X (3 o'clock); positive angles run clockwise on screen.
    #[inline]
    pub fn polar(angle: f32, rx: f32, ry: f32) -> Self {
        Self::new(angle.cos() * rx, angle.sin() * ry)
    }

    /// Rotates about the origin by `angle` radians (clockwise on screen).
    #[inline]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_maps_up_to_right() {
        // "Up" on screen is -Y; a clockwise quarter turn points it at +X.
        let up = Vec2::new(0.0, -10.0);
        assert!(close(up.rotated(FRAC_PI_2), Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.rotated(1.234).length() - 5.0).abs() < 1e-4);
    }

    // ── polar ─────────────────────────────────────────────────────────────

    #[test]
    fn polar_zero_is_positive_x() {
        assert!(close(Vec2::polar(0.0, 5.0, 7.0), Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn polar_quarter_turn_is_down_with_y_radius() {
        assert!(close(Vec2::polar(FRAC_PI_2, 5.0, 7.0), Vec2::new(0.0, 7.0)));
    }
}
