use std::fmt;

use tiny_skia::{ColorU8, FillRule, Mask, Path, Pixmap, PixmapPaint, Stroke, Transform};

use crate::coords::Vec2;
use crate::paint::{Color, Composite, Paint};

use super::{FaceImage, RasterError, Shape};

/// Hard (unblurred) drop shadow.
///
/// The shadow is the shape's geometry shifted by `offset` and filled with
/// `color`, painted immediately before the shape with the same composite rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    pub color: Color,
}

impl Shadow {
    #[inline]
    pub const fn new(offset: Vec2, color: Color) -> Self {
        Self { offset, color }
    }

    /// A shadow paints nothing when transparent or not offset.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.color.a > 0 && (self.offset.x != 0.0 || self.offset.y != 0.0)
    }
}

/// Anti-aliased coverage mask restricting where draws land.
pub struct ClipMask {
    mask: Mask,
}

impl fmt::Debug for ClipMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipMask")
            .field("width", &self.mask.width())
            .field("height", &self.mask.height())
            .finish()
    }
}

/// Per-draw state: composite rule, optional shadow, optional clip.
#[derive(Debug, Copy, Clone, Default)]
pub struct DrawOptions<'a> {
    pub composite: Composite,
    pub shadow: Option<Shadow>,
    pub clip: Option<&'a ClipMask>,
}

impl<'a> DrawOptions<'a> {
    #[inline]
    pub fn composite(composite: Composite) -> Self {
        Self { composite, ..Self::default() }
    }

    #[inline]
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[inline]
    pub fn with_clip(mut self, clip: &'a ClipMask) -> Self {
        self.clip = Some(clip);
        self
    }
}

/// Fixed-size RGBA raster target.
///
/// Pixels are premultiplied, 8 bits per channel, origin top-left. The size is
/// set at construction and never changes.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidDimensions { width, height })?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }

    /// Premultiplied RGBA bytes, row-major, no padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| p.demultiply().into())
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Fills `shape` with `paint`.
    pub fn fill(&mut self, shape: &Shape, paint: &Paint, opts: &DrawOptions<'_>) {
        let Some(path) = shape.to_path() else {
            return;
        };
        self.paint_path(&path, paint, None, opts);
    }

    /// Strokes the outline of `shape` with butt caps.
    pub fn stroke(&mut self, shape: &Shape, width: f32, paint: &Paint, opts: &DrawOptions<'_>) {
        if width.is_nan() || width <= 0.0 {
            return;
        }
        let Some(path) = shape.to_path() else {
            return;
        };
        let stroke = Stroke { width, ..Stroke::default() };
        self.paint_path(&path, paint, Some(&stroke), opts);
    }

    /// Builds a clip mask covering `shape`, sized to this surface.
    pub fn clip_mask(&self, shape: &Shape) -> Option<ClipMask> {
        let path = shape.to_path()?;
        let mut mask = Mask::new(self.width(), self.height())?;
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        Some(ClipMask { mask })
    }

    /// Composites an 8-bit coverage bitmap tinted with `color` at `(x, y)`.
    ///
    /// `coverage` is row-major `width × height`; parts outside the surface are
    /// dropped.
    pub fn draw_coverage(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        coverage: &[u8],
        color: Color,
    ) {
        if coverage.len() < (width as usize) * (height as usize) {
            log::debug!("coverage bitmap shorter than {width}x{height}, skipping");
            return;
        }
        let Some(mut tile) = Pixmap::new(width, height) else {
            return;
        };
        for (dst, &c) in tile.pixels_mut().iter_mut().zip(coverage) {
            *dst = ColorU8::from_rgba(color.r, color.g, color.b, color.scaled_alpha(c)).premultiply();
        }
        self.pixmap.draw_pixmap(
            x,
            y,
            tile.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Captures the current pixels as an immutable [`FaceImage`].
    pub fn snapshot(&self) -> FaceImage {
        FaceImage::from_pixmap(self.pixmap.clone())
    }

    /// Replaces every pixel with `image` (no blending, so no clear is needed).
    pub fn restore(&mut self, image: &FaceImage) -> Result<(), RasterError> {
        if (image.width(), image.height()) != self.size() {
            return Err(RasterError::SizeMismatch {
                expected: self.size(),
                found: (image.width(), image.height()),
            });
        }
        self.pixmap.data_mut().copy_from_slice(image.pixmap().data());
        Ok(())
    }

    fn paint_path(
        &mut self,
        path: &Path,
        paint: &Paint,
        stroke: Option<&Stroke>,
        opts: &DrawOptions<'_>,
    ) {
        let mask = opts.clip.map(|c| &c.mask);

        if let Some(shadow) = opts.shadow.filter(Shadow::is_visible) {
            if let Some(shadow_paint) = Paint::Solid(shadow.color).to_skia(opts.composite) {
                let t = Transform::from_translate(shadow.offset.x, shadow.offset.y);
                self.draw_path(path, &shadow_paint, stroke, t, mask);
            }
        }

        if let Some(p) = paint.to_skia(opts.composite) {
            self.draw_path(path, &p, stroke, Transform::identity(), mask);
        }
    }

    fn draw_path(
        &mut self,
        path: &Path,
        paint: &tiny_skia::Paint<'_>,
        stroke: Option<&Stroke>,
        transform: Transform,
        mask: Option<&Mask>,
    ) {
        match stroke {
            Some(s) => self.pixmap.stroke_path(path, paint, s, transform, mask),
            None => self.pixmap.fill_path(path, paint, FillRule::Winding, transform, mask),
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
