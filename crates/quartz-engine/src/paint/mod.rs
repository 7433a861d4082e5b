//! Paint model used by the rasterizer.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - paint sources (solid, linear gradient)
//! - composite rules
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Converts to a `tiny_skia` paint with anti-aliasing on.
    ///
    /// Returns `None` for an unusable gradient (fewer than two stops or a
    /// zero-length axis); callers skip the draw.
    pub(crate) fn to_skia(&self, composite: Composite) -> Option<tiny_skia::Paint<'static>> {
        let shader = match self {
            Paint::Solid(c) => tiny_skia::Shader::SolidColor(c.to_skia()),
            Paint::LinearGradient(g) => g.to_shader()?,
        };
        let mut paint = tiny_skia::Paint::default();
        paint.shader = shader;
        paint.blend_mode = composite.blend_mode();
        paint.anti_alias = true;
        Some(paint)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

/// Compositing rule applied when new pixels meet existing ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Composite {
    /// Paint over existing content.
    #[default]
    SourceOver,
    /// Erase existing content where the source covers ("clear").
    DestinationOut,
    /// Paint only behind existing content ("draw-behind").
    DestinationOver,
}

impl Composite {
    #[inline]
    pub(crate) fn blend_mode(self) -> tiny_skia::BlendMode {
        match self {
            Composite::SourceOver => tiny_skia::BlendMode::SourceOver,
            Composite::DestinationOut => tiny_skia::BlendMode::DestinationOut,
            Composite::DestinationOver => tiny_skia::BlendMode::DestinationOver,
        }
    }
}
