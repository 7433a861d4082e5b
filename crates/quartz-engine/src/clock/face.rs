use crate::coords::Vec2;
use crate::paint::{Color, ColorStop, Composite, LinearGradient, Paint};
use crate::surface::{DrawOptions, FaceImage, Shadow, Shape, Surface};
use crate::text::{FontId, FontSystem};

use super::geometry::FaceGeometry;
use super::palette;

/// Maker's mark printed under the pivot.
pub const BRAND_TEXT: &str = "QUARTZ";

const BEVEL_SHADOW_OFFSET: Vec2 = Vec2::new(7.5, -11.0);
const BEVEL_LINE_WIDTH: f32 = 1.0;

/// Fonts used for the face text. `None` skips that text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FaceFonts {
    pub numerals: Option<FontId>,
    pub brand: Option<FontId>,
}

/// Paints the static face and captures it.
///
/// Paint order: rim disc, dial cutout with bevel, left vignette, numerals,
/// brand text, ticks. The snapshot is taken only after the last step.
pub struct FaceBuilder<'a> {
    geometry: FaceGeometry,
    fonts: &'a FontSystem,
    face_fonts: FaceFonts,
}

impl<'a> FaceBuilder<'a> {
    pub fn new(geometry: FaceGeometry, fonts: &'a FontSystem, face_fonts: FaceFonts) -> Self {
        Self {
            geometry,
            fonts,
            face_fonts,
        }
    }

    /// Clears `surface`, paints the face and returns its snapshot.
    pub fn build(&self, surface: &mut Surface) -> FaceImage {
        surface.clear();

        self.paint_dial(surface);
        self.paint_shading(surface);
        self.paint_numerals(surface);
        self.paint_brand(surface);
        self.paint_ticks(surface);

        log::debug!(
            "face built ({}x{}, numerals: {}, brand: {})",
            surface.width(),
            surface.height(),
            self.face_fonts.numerals.is_some(),
            self.face_fonts.brand.is_some(),
        );

        surface.snapshot()
    }

    fn paint_dial(&self, surface: &mut Surface) {
        let center = self.geometry.center();
        let dial = Shape::circle(center, self.geometry.dial_radius());

        surface.fill(
            &Shape::circle(center, self.geometry.rim_radius()),
            &palette::RIM.into(),
            &DrawOptions::default(),
        );

        // Punch the dial out of the rim disc.
        surface.fill(
            &dial,
            &Color::BLACK.into(),
            &DrawOptions::composite(Composite::DestinationOut),
        );

        // Everything below lands behind the rim; the offset highlight shows
        // through as the bevel.
        let behind = DrawOptions::composite(Composite::DestinationOver)
            .with_shadow(Shadow::new(BEVEL_SHADOW_OFFSET, palette::BEVEL_HIGHLIGHT));
        surface.stroke(&dial, BEVEL_LINE_WIDTH, &palette::BEVEL_LINE.into(), &behind);
        surface.fill(&dial, &palette::DIAL.into(), &behind);
    }

    fn paint_shading(&self, surface: &mut Surface) {
        let center = self.geometry.center();
        let Some(clip) = surface.clip_mask(&Shape::circle(center, self.geometry.dial_radius()))
        else {
            return;
        };

        let half_width = self.geometry.width() / 2.0;
        let gradient = LinearGradient::new(
            Vec2::new(0.0, center.y),
            Vec2::new(half_width, center.y),
            vec![
                ColorStop::new(0.0, Color::BLACK.with_alpha_f32(palette::SHADING_ALPHA)),
                ColorStop::new(0.5, Color::TRANSPARENT),
            ],
        );

        surface.fill(
            &Shape::rect(Vec2::zero(), Vec2::new(half_width, self.geometry.height())),
            &Paint::LinearGradient(gradient),
            &DrawOptions::default().with_clip(&clip),
        );
    }

    fn paint_numerals(&self, surface: &mut Surface) {
        let Some(font) = self.face_fonts.numerals else {
            log::warn!("no numeral font loaded; face numerals skipped");
            return;
        };
        let size = self.geometry.numeral_font_size();
        for numeral in self.geometry.numerals() {
            self.fonts.draw_text_centered(
                surface,
                &numeral.value.to_string(),
                font,
                size,
                palette::INK,
                numeral.position,
            );
        }
    }

    fn paint_brand(&self, surface: &mut Surface) {
        let Some(font) = self.face_fonts.brand else {
            log::warn!("no brand font loaded; {BRAND_TEXT:?} skipped");
            return;
        };
        self.fonts.draw_text_centered(
            surface,
            BRAND_TEXT,
            font,
            self.geometry.brand_font_size(),
            palette::INK,
            self.geometry.brand_anchor(),
        );
    }

    fn paint_ticks(&self, surface: &mut Surface) {
        let paint: Paint = palette::TICK.into();
        let opts = DrawOptions::default();
        for tick in self.geometry.ticks() {
            surface.stroke(&Shape::segment(tick.inner, tick.outer), tick.width, &paint, &opts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(width: u32, height: u32) -> FaceImage {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(width, height).unwrap();
        FaceBuilder::new(FaceGeometry::new(width, height), &fonts, FaceFonts::default())
            .build(&mut surface)
    }

    #[test]
    fn rasterization_is_deterministic() {
        assert_eq!(build(200, 200), build(200, 200));
    }

    #[test]
    fn build_ignores_previous_surface_content() {
        let fonts = FontSystem::new();
        let mut surface = Surface::new(120, 120).unwrap();
        surface.fill(
            &Shape::rect(Vec2::zero(), Vec2::new(120.0, 120.0)),
            &palette::SECOND_HAND.into(),
            &DrawOptions::default(),
        );
        let face = FaceBuilder::new(FaceGeometry::new(120, 120), &fonts, FaceFonts::default())
            .build(&mut surface);
        assert_eq!(face, build(120, 120));
    }

    #[test]
    fn corners_stay_transparent() {
        let face = build(200, 200);
        assert_eq!(face.pixel(0, 0).map(|c| c.a), Some(0));
        assert_eq!(face.pixel(199, 199).map(|c| c.a), Some(0));
    }

    #[test]
    fn rim_keeps_its_color_at_the_bottom() {
        // Bottom of the rim ring, away from the bevel highlight (which is
        // offset up and to the right) and the left vignette.
        let face = build(400, 400);
        assert_eq!(face.pixel(200, 394), Some(palette::RIM));
    }

    #[test]
    fn hour_tick_is_black() {
        // Tick 3 (3 o'clock) runs from x = 375.6 to 382.4 along y = 200.
        let face = build(400, 400);
        let c = face.pixel(378, 199).unwrap();
        assert_eq!(c, palette::TICK);
    }

    #[test]
    fn dial_is_opaque() {
        let face = build(400, 400);
        assert_eq!(face.pixel(300, 300).map(|c| c.a), Some(255));
    }

    // ── shading ───────────────────────────────────────────────────────────

    fn near(a: Color, b: Color, tolerance: u8) -> bool {
        let d = |x: u8, y: u8| x.abs_diff(y) <= tolerance;
        d(a.r, b.r) && d(a.g, b.g) && d(a.b, b.b) && d(a.a, b.a)
    }

    #[test]
    fn bevel_highlight_covers_the_upper_right_dial() {
        // Inside the shifted highlight disc, right of the vignette.
        let c = build(400, 400).pixel(360, 260).unwrap();
        assert!(near(c, palette::BEVEL_HIGHLIGHT, 2), "got {c:?}");
    }

    #[test]
    fn dial_shows_in_the_lower_left_crescent() {
        // Inside the dial but outside the highlight disc, which is shifted
        // up and to the right.
        let c = build(400, 400).pixel(96, 353).unwrap();
        assert!(near(c, palette::DIAL, 2), "got {c:?}");
    }

    #[test]
    fn vignette_darkens_only_the_left() {
        let face = build(400, 400);
        let left = face.pixel(40, 260).unwrap();
        let right = face.pixel(360, 260).unwrap();
        assert!(u16::from(left.r) + 10 < u16::from(right.r), "{left:?} vs {right:?}");
        // Black over a neutral highlight stays neutral.
        assert!(left.r.abs_diff(left.b) <= 1 && left.g.abs_diff(left.b) <= 1);
    }

    // ── text ──────────────────────────────────────────────────────────────

    const SYSTEM_FONTS: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];

    fn face_with_system_font() -> Option<FaceImage> {
        let bytes = SYSTEM_FONTS.iter().find_map(|p| std::fs::read(p).ok())?;
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(&bytes).ok()?;
        let face_fonts = FaceFonts {
            numerals: Some(id),
            brand: Some(id),
        };
        let mut surface = Surface::new(400, 400).unwrap();
        Some(FaceBuilder::new(FaceGeometry::new(400, 400), &fonts, face_fonts).build(&mut surface))
    }

    /// Darkest pixel within `radius` of `(cx, cy)`.
    fn darkest_near(face: &FaceImage, cx: u32, cy: u32, radius: u32) -> Color {
        let mut darkest = face.pixel(cx, cy).unwrap();
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let c = face.pixel(x, y).unwrap();
                if u16::from(c.r) + u16::from(c.g) + u16::from(c.b)
                    < u16::from(darkest.r) + u16::from(darkest.g) + u16::from(darkest.b)
                {
                    darkest = c;
                }
            }
        }
        darkest
    }

    fn is_ink_tinted(c: Color) -> bool {
        // Ink over the white highlight keeps the ink's r > b > g ordering.
        c.r >= c.b && c.b >= c.g && c.r > c.g
    }

    #[test]
    fn numerals_are_inked_at_twelve_and_three() {
        let Some(face) = face_with_system_font() else {
            eprintln!("no system font found; skipping");
            return;
        };
        for (x, y) in [(200, 58), (342, 200)] {
            let c = darkest_near(&face, x, y, 14);
            assert!(c.r <= palette::INK.r + 30, "numeral at ({x}, {y}) too light: {c:?}");
            assert!(is_ink_tinted(c), "numeral at ({x}, {y}) is not ink: {c:?}");
        }
    }

    #[test]
    fn brand_text_is_inked_below_the_pivot() {
        let Some(face) = face_with_system_font() else {
            eprintln!("no system font found; skipping");
            return;
        };
        let c = darkest_near(&face, 200, 260, 8);
        assert!(c.r < 200, "brand text missing: {c:?}");
        assert!(is_ink_tinted(c), "brand text is not ink: {c:?}");

        let plain = build(400, 400);
        assert!(plain.pixel(200, 260).is_some_and(|p| p.r > 240));
    }
}
