use anyhow::{Context, Result};

use quartz_engine::clock::{AnimationHandle, ClockOptions, ClockRenderer, DEFAULT_SIZE};
use quartz_engine::core::{App, AppControl, FrameCtx};
use quartz_engine::device::GpuInit;
use quartz_engine::logging::{init_logging, LoggingConfig};
use quartz_engine::paint::Color;
use quartz_engine::render::SurfaceBlitter;
use quartz_engine::window::{Runtime, RuntimeConfig};

const OFFSET_ENV: &str = "QUARTZ_OFFSET_HOURS";
const BACKGROUND: Color = Color::from_hex(0xF4F1EA);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let offset = parse_offset(std::env::var(OFFSET_ENV).ok().as_deref());
    let mut options = ClockOptions::new().time_offset_hours(offset);
    match load_font(NUMERAL_FONTS) {
        Some(bytes) => options = options.numeral_font(bytes),
        None => log::warn!("no system font found; numerals and brand text will be skipped"),
    }
    if let Some(bytes) = load_font(BRAND_FONTS) {
        options = options.brand_font(bytes);
    }

    let renderer = ClockRenderer::new(options).context("failed to build clock")?;
    let mut clock = AnimationHandle::with_system_clock(renderer);
    clock.start().context("failed to paint first frame")?;

    let size = (DEFAULT_SIZE + 80) as f64;
    Runtime::run(
        RuntimeConfig::new("Quartz").with_size(size, size),
        GpuInit::default(),
        ClockApp {
            clock,
            blitter: SurfaceBlitter::new(),
        },
    )
}

struct ClockApp {
    clock: AnimationHandle,
    blitter: SurfaceBlitter,
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Err(e) = self.clock.tick() {
            log::error!("clock frame failed: {e}");
            return AppControl::Exit;
        }
        if ctx.time.frame_index % 600 == 0 {
            log::debug!("frame {} ({} clock frames)", ctx.time.frame_index, self.clock.frames());
        }

        let surface = self.clock.renderer().surface();
        let blitter = &mut self.blitter;
        ctx.render(BACKGROUND, |rctx, target| blitter.draw(rctx, target, surface))
    }
}

/// Whole-hour offset from the environment; unset or unparsable means UTC.
fn parse_offset(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<i32>() {
        Ok(hours) => hours,
        Err(e) => {
            log::warn!("ignoring {OFFSET_ENV}={raw:?}: {e}");
            0
        }
    }
}

const NUMERAL_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

const BRAND_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans-ExtraLight.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-ExtraLight.ttf",
    "/usr/share/fonts/noto/NotoSans-Light.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Light.ttf",
];

fn load_font(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| std::fs::read(p).ok())
}
