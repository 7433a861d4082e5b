use chrono::{DateTime, Utc};

use crate::surface::{FaceImage, RasterError, Surface, SurfaceProvider, SurfaceRegistry};
use crate::text::{FontId, FontSystem};
use crate::time::{ClockTime, TimeOffset};

use super::face::{FaceBuilder, FaceFonts};
use super::geometry::FaceGeometry;
use super::hands::HandAnimator;
use super::{ClockError, ClockOptions};

/// One analog clock bound to one surface.
///
/// The face is painted once in [`mount`](Self::mount); [`render`](Self::render)
/// only restores it and draws hands on top, so the cached [`FaceImage`] never
/// changes for the lifetime of the renderer.
#[derive(Debug)]
pub struct ClockRenderer {
    surface: Surface,
    face: FaceImage,
    animator: HandAnimator,
    geometry: FaceGeometry,
    offset: TimeOffset,
}

impl ClockRenderer {
    /// Creates a clock on a fresh surface sized from `options`.
    ///
    /// Fails with [`ClockError::UnknownSurface`] if `options.surface_id` is set,
    /// since there is no provider to adopt from.
    pub fn new(options: ClockOptions) -> Result<Self, ClockError> {
        Self::mount(options, &mut SurfaceRegistry::new())
    }

    /// Creates a clock, adopting `options.surface_id` from `provider` when set.
    pub fn mount(options: ClockOptions, provider: &mut dyn SurfaceProvider) -> Result<Self, ClockError> {
        let mut surface = match options.surface_id.as_deref() {
            Some(id) => provider
                .take_surface(id)
                .ok_or_else(|| ClockError::UnknownSurface(id.to_owned()))?,
            None => Surface::new(options.width, options.height)?,
        };

        let (width, height) = surface.size();
        let geometry = FaceGeometry::new(width, height);

        let mut fonts = FontSystem::new();
        let face_fonts = load_face_fonts(&mut fonts, &options);
        let face = FaceBuilder::new(geometry, &fonts, face_fonts).build(&mut surface);

        let offset = TimeOffset(options.time_offset_hours);
        log::info!(
            "clock mounted: {width}x{height}, offset {:+}h, surface {}",
            offset.hours(),
            options.surface_id.as_deref().unwrap_or("<owned>"),
        );

        Ok(Self {
            surface,
            face,
            animator: HandAnimator::new(geometry),
            geometry,
            offset,
        })
    }

    /// Paints one frame for `t`.
    pub fn render(&mut self, t: &ClockTime) -> Result<(), RasterError> {
        self.animator.draw(&mut self.surface, &self.face, t)
    }

    /// Samples `now` with this clock's offset and paints it.
    pub fn render_at(&mut self, now: DateTime<Utc>) -> Result<ClockTime, RasterError> {
        let t = ClockTime::sample(now, self.offset);
        self.render(&t)?;
        Ok(t)
    }

    #[inline]
    pub fn face(&self) -> &FaceImage {
        &self.face
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn into_surface(self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn offset(&self) -> TimeOffset {
        self.offset
    }

    #[inline]
    pub fn geometry(&self) -> FaceGeometry {
        self.geometry
    }
}

fn load_face_fonts(fonts: &mut FontSystem, options: &ClockOptions) -> FaceFonts {
    let numerals = options
        .numeral_font
        .as_deref()
        .and_then(|bytes| load_or_warn(fonts, bytes, "numeral"));
    let brand = match options.brand_font.as_deref() {
        Some(bytes) => load_or_warn(fonts, bytes, "brand").or(numerals),
        None => numerals,
    };
    FaceFonts { numerals, brand }
}

fn load_or_warn(fonts: &mut FontSystem, bytes: &[u8], role: &str) -> Option<FontId> {
    match fonts.load_font(bytes) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("{role} font rejected: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::surface::{DrawOptions, Shape};
    use chrono::{NaiveDate, TimeZone};

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap();
        Utc.from_utc_datetime(&naive)
    }

    fn small() -> ClockOptions {
        ClockOptions::new().size(160, 160)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_surface_is_400_square() {
        let clock = ClockRenderer::new(ClockOptions::new()).unwrap();
        assert_eq!(clock.surface().size(), (400, 400));
        assert_eq!(clock.geometry(), FaceGeometry::new(400, 400));
    }

    #[test]
    fn zero_size_is_an_error() {
        let err = ClockRenderer::new(ClockOptions::new().size(0, 400)).unwrap_err();
        assert!(matches!(
            err,
            ClockError::Raster(RasterError::InvalidDimensions { width: 0, height: 400 })
        ));
    }

    #[test]
    fn unknown_surface_id_is_an_error() {
        let mut registry = SurfaceRegistry::new();
        let err = ClockRenderer::mount(small().surface_id("missing"), &mut registry).unwrap_err();
        assert!(matches!(err, ClockError::UnknownSurface(ref id) if id == "missing"));
    }

    #[test]
    fn surface_id_without_provider_is_an_error() {
        assert!(ClockRenderer::new(small().surface_id("host")).is_err());
    }

    #[test]
    fn adopted_surface_keeps_its_own_size() {
        let mut registry = SurfaceRegistry::new();
        registry.insert("host", Surface::new(300, 200).unwrap());

        let clock = ClockRenderer::mount(small().surface_id("host"), &mut registry).unwrap();
        assert_eq!(clock.surface().size(), (300, 200));
        assert!(!registry.contains("host"));
    }

    #[test]
    fn adopted_surface_content_is_replaced_by_the_face() {
        let mut host = Surface::new(160, 160).unwrap();
        host.fill(
            &Shape::rect(Vec2::zero(), Vec2::new(160.0, 160.0)),
            &Color::from_hex(0x00FF00).into(),
            &DrawOptions::default(),
        );
        let mut registry = SurfaceRegistry::new();
        registry.insert("host", host);

        let adopted = ClockRenderer::mount(small().surface_id("host"), &mut registry).unwrap();
        let owned = ClockRenderer::new(small()).unwrap();
        assert_eq!(adopted.face(), owned.face());
    }

    #[test]
    fn invalid_font_bytes_are_not_fatal() {
        let clock = ClockRenderer::new(small().numeral_font(vec![0; 16])).unwrap();
        let plain = ClockRenderer::new(small()).unwrap();
        assert_eq!(clock.face(), plain.face());
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn ticking_never_changes_the_face() {
        let mut clock = ClockRenderer::new(small()).unwrap();
        let before = clock.face().clone();
        for s in 0..5 {
            clock.render_at(utc(10, 15, s * 7)).unwrap();
        }
        assert_eq!(clock.face(), &before);
        assert_ne!(clock.surface().snapshot(), before);
    }

    #[test]
    fn face_matches_a_fresh_build() {
        let a = ClockRenderer::new(small()).unwrap();
        let b = ClockRenderer::new(small()).unwrap();
        assert_eq!(a.face(), b.face());
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = ClockRenderer::new(small()).unwrap();
        let b = ClockRenderer::new(small()).unwrap();
        let b_before = b.surface().snapshot();

        a.render_at(utc(4, 40, 0)).unwrap();
        assert_eq!(b.surface().snapshot(), b_before);
        assert_ne!(a.surface().snapshot(), b_before);
    }

    #[test]
    fn offset_is_applied_when_sampling() {
        let mut clock = ClockRenderer::new(small().time_offset_hours(-5)).unwrap();
        let t = clock.render_at(utc(2, 0, 0)).unwrap();
        assert_eq!(t.hours, 21);
        assert_eq!(clock.offset(), TimeOffset(-5));
    }
}
