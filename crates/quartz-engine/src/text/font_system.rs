use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("font load error: {0}")]
pub struct FontLoadError(pub String);

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. Text is drawn centered on an anchor
/// point, horizontally by advance width and vertically on the em-box middle.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        if bytes.is_empty() {
            return Err(FontLoadError("no font data".to_string()));
        }
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Advance-box size of `text` at `size` pixels.
    ///
    /// Unknown fonts measure as zero width and one line of height.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph, not the bitmap edge, so trailing
        // side bearings count toward the width.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout.height().max(size);
        Vec2::new(w, h)
    }

    /// Draws `text` centered on `anchor`.
    pub fn draw_text_centered(
        &self,
        surface: &mut Surface,
        text: &str,
        id: FontId,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        let Some(font) = self.get(id) else {
            log::warn!("unknown FontId {id:?}, skipping text {text:?}");
            return;
        };

        let width = self.measure_text(text, id, size).x;
        let (ascent, descent) = font
            .horizontal_line_metrics(size)
            .map_or((size * 0.8, -size * 0.2), |m| (m.ascent, m.descent));

        // Line top such that the em-box middle sits on anchor.y.
        let top = anchor.y - (ascent - descent) / 2.0;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: anchor.x - width / 2.0,
            y: top,
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        for g in layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, bitmap) = font.rasterize_config(g.key);
            surface.draw_coverage(
                g.x.round() as i32,
                g.y.round() as i32,
                metrics.width as u32,
                metrics.height as u32,
                &bitmap,
                color,
            );
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bytes_fail_to_load() {
        let mut fs = FontSystem::new();
        assert!(fs.load_font(&[]).is_err());
        assert!(fs.is_empty());
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fs = FontSystem::new();
        let err = fs.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn unknown_font_measures_one_line() {
        let fs = FontSystem::new();
        let m = fs.measure_text("12", FontId(3), 10.0);
        assert_eq!(m.x, 0.0);
        assert!((m.y - 12.0).abs() < 1e-4);
    }

    #[test]
    fn unknown_font_draws_nothing() {
        let fs = FontSystem::new();
        let mut s = Surface::new(16, 16).unwrap();
        let center = s.center();
        fs.draw_text_centered(&mut s, "QUARTZ", FontId(0), 8.0, Color::BLACK, center);
        assert!(s.data().iter().all(|&b| b == 0));
    }
}
