use std::fmt;

use tiny_skia::Pixmap;

use crate::paint::Color;

/// Immutable snapshot of a surface's pixels.
///
/// Produced only by [`Surface::snapshot`](super::Surface::snapshot); there is
/// no mutable access afterwards. Equality is size plus exact pixel bytes.
#[derive(Clone)]
pub struct FaceImage {
    pixmap: Pixmap,
}

impl FaceImage {
    pub(super) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    pub(super) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
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
}

impl PartialEq for FaceImage {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }
}

impl Eq for FaceImage {}

impl fmt::Debug for FaceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaceImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
