/// Straight-alpha sRGB color, 8 bits per channel.
///
/// Values are stored unmanaged: no linearization happens on the CPU path, the
/// rasterizer blends them the way a 2D canvas does.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Color from a `0xRRGGBBAA` literal.
    #[inline]
    pub const fn from_hex_rgba(rgba: u32) -> Self {
        Self::rgba((rgba >> 24) as u8, (rgba >> 16) as u8, (rgba >> 8) as u8, rgba as u8)
    }

    /// Replaces alpha with a `[0, 1]` fraction, rounded to the nearest byte.
    #[inline]
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    #[inline]
    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Linear-light premultiplied channels, as a GPU clear color on an sRGB
    /// target expects.
    pub fn to_linear_f64(self) -> [f64; 4] {
        let a = self.a as f64 / 255.0;
        let lin = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        [lin(self.r) * a, lin(self.g) * a, lin(self.b) * a, a]
    }

    /// Alpha scaled by `coverage / 255`, as used when compositing glyph masks.
    #[inline]
    pub(crate) fn scaled_alpha(self, coverage: u8) -> u8 {
        ((self.a as u16 * coverage as u16 + 127) / 255) as u8
    }
}

impl From<tiny_skia::ColorU8> for Color {
    fn from(c: tiny_skia::ColorU8) -> Self {
        Self::rgba(c.red(), c.green(), c.blue(), c.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_conversion_endpoints() {
        assert_eq!(Color::BLACK.to_linear_f64(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::rgb(255, 255, 255).to_linear_f64(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::TRANSPARENT.to_linear_f64()[3], 0.0);
        let mid = Color::rgb(128, 128, 128).to_linear_f64()[0];
        assert!((mid - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn hex_splits_channels() {
        assert_eq!(Color::from_hex(0x5F4428), Color::rgb(0x5F, 0x44, 0x28));
    }

    #[test]
    fn hex_rgba_keeps_alpha() {
        assert_eq!(Color::from_hex_rgba(0x10060A33), Color::rgba(0x10, 0x06, 0x0A, 0x33));
    }

    #[test]
    fn alpha_fraction_rounds() {
        assert_eq!(Color::BLACK.with_alpha_f32(0.15).a, 38);
        assert_eq!(Color::BLACK.with_alpha_f32(2.0).a, 255);
    }

    #[test]
    fn coverage_scales_alpha() {
        assert_eq!(Color::BLACK.scaled_alpha(255), 255);
        assert_eq!(Color::BLACK.scaled_alpha(0), 0);
        assert_eq!(Color::rgba(0, 0, 0, 0x33).scaled_alpha(255), 0x33);
    }
}
