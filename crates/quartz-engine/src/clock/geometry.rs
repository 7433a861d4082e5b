use std::f32::consts::TAU;

use crate::coords::Vec2;

/// Width of the wooden rim between the outer disc and the dial.
pub const RIM_WIDTH: f32 = 12.0;

const NUMERAL_RADIUS: f32 = 0.355;
const TICK_INNER_RADIUS: f32 = 0.439;
const TICK_OUTER_RADIUS: f32 = 0.456;
const NUMERAL_FONT_DIVISOR: f32 = 8.3;
const BRAND_FONT_DIVISOR: f32 = 31.0;
const BRAND_DROP: f32 = 1.3;

const HOUR_TICK_WIDTH: f32 = 7.0;
const MINUTE_TICK_WIDTH: f32 = 2.0;

/// Angle of numeral `n` (1..=12). 3 sits at 0 rad, 12 at the top.
#[inline]
pub fn numeral_angle(n: u32) -> f32 {
    (n as f32 - 3.0) * TAU / 12.0
}

/// Angle of tick `index` (1..=60), using the same 3 o'clock origin.
#[inline]
pub fn tick_angle(index: u32) -> f32 {
    (index as f32 - 3.0) * TAU / 60.0
}

/// Stroke width of tick `index`: wide on the twelve hour positions.
#[inline]
pub fn tick_width(index: u32) -> f32 {
    if (index as i64 - 3).rem_euclid(5) == 0 {
        HOUR_TICK_WIDTH
    } else {
        MINUTE_TICK_WIDTH
    }
}

/// One placed hour numeral.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Numeral {
    pub value: u32,
    pub angle: f32,
    /// Center of the glyph run, in surface pixels.
    pub position: Vec2,
}

/// One placed minute tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    /// 1..=60
    pub index: u32,
    pub angle: f32,
    pub inner: Vec2,
    pub outer: Vec2,
    pub width: f32,
}

impl TickMark {
    /// Minute the tick marks on the dial, 0 at the top.
    #[inline]
    pub fn minute_mark(&self) -> u32 {
        (self.index + 12) % 60
    }

    #[inline]
    pub fn is_hour(&self) -> bool {
        self.width == HOUR_TICK_WIDTH
    }
}

/// Size-derived layout of the clock face and hands.
///
/// Horizontal radii scale with the width and vertical radii with the height;
/// angles never depend on size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceGeometry {
    width: f32,
    height: f32,
}

impl FaceGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the outer (rim) disc.
    #[inline]
    pub fn rim_radius(&self) -> f32 {
        self.width / 2.0
    }

    /// Radius of the dial inside the rim.
    #[inline]
    pub fn dial_radius(&self) -> f32 {
        self.rim_radius() - RIM_WIDTH
    }

    #[inline]
    pub fn numeral_font_size(&self) -> f32 {
        self.width / NUMERAL_FONT_DIVISOR
    }

    #[inline]
    pub fn brand_font_size(&self) -> f32 {
        self.width / BRAND_FONT_DIVISOR
    }

    /// Center of the brand text, below the pivot.
    #[inline]
    pub fn brand_anchor(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0 * BRAND_DROP)
    }

    pub fn numerals(&self) -> impl Iterator<Item = Numeral> + '_ {
        (1..=12).map(move |value| {
            let angle = numeral_angle(value);
            Numeral {
                value,
                angle,
                position: self.on_ellipse(angle, NUMERAL_RADIUS),
            }
        })
    }

    pub fn ticks(&self) -> impl Iterator<Item = TickMark> + '_ {
        (1..=60).map(move |index| {
            let angle = tick_angle(index);
            TickMark {
                index,
                angle,
                inner: self.on_ellipse(angle, TICK_INNER_RADIUS),
                outer: self.on_ellipse(angle, TICK_OUTER_RADIUS),
                width: tick_width(index),
            }
        })
    }

    #[inline]
    fn on_ellipse(&self, angle: f32, fraction: f32) -> Vec2 {
        self.center() + Vec2::polar(angle, self.width * fraction, self.height * fraction)
    }
}
