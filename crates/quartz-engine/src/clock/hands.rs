use std::f32::consts::PI;

use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::surface::{DrawOptions, FaceImage, RasterError, Shape, Surface};
use crate::time::ClockTime;

use super::geometry::FaceGeometry;
use super::palette;

const SHADOW_PIVOT_OFFSET: Vec2 = Vec2::new(4.0, -2.0);
const PIN_OUTER_RADIUS: f32 = 4.0;
const PIN_INNER_RADIUS: f32 = 2.5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Paint order.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Clockwise rotation from 12 o'clock, in radians.
    pub fn angle(self, t: &ClockTime) -> f32 {
        let h = t.hours as f32;
        let m = t.minutes as f32;
        let s = t.seconds;
        match self {
            Hand::Hour => (PI / 6.0) * (h + m / 60.0 + s / 3600.0),
            Hand::Minute => (PI / 30.0) * (m + s / 60.0),
            Hand::Second => (PI / 30.0) * s,
        }
    }

    /// Unrotated outline about the pivot; -Y points at 12.
    pub fn outline(self, width: f32) -> Vec<Vec2> {
        let p = Vec2::new;
        match self {
            Hand::Hour => {
                let tip = -0.24 * width;
                vec![
                    p(-3.0, 40.0),
                    p(3.0, 40.0),
                    p(5.0, 0.0),
                    p(3.0, tip),
                    p(-3.0, tip),
                    p(-5.0, 0.0),
                ]
            }
            Hand::Minute => {
                let tip = -0.379 * width;
                vec![
                    p(-3.0, 40.0),
                    p(3.0, 40.0),
                    p(5.0, 0.0),
                    p(2.0, tip),
                    p(-2.0, tip),
                    p(-5.0, 0.0),
                ]
            }
            Hand::Second => {
                let tip = -0.434 * width;
                vec![
                    p(-3.0, 82.0),
                    p(3.0, 82.0),
                    p(5.0, 40.0),
                    p(1.0, 40.0),
                    p(2.0, 0.0),
                    p(0.75, tip),
                    p(-0.75, tip),
                    p(-2.0, 0.0),
                    p(-1.0, 40.0),
                    p(-5.0, 40.0),
                ]
            }
        }
    }

    pub fn color(self) -> Color {
        match self {
            Hand::Hour | Hand::Minute => palette::HAND,
            Hand::Second => palette::SECOND_HAND,
        }
    }
}

/// Which pass of a hand is being drawn. The shadow pass always runs first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandLayer {
    Shadow,
    Solid,
}

impl HandLayer {
    #[inline]
    pub fn pivot_offset(self) -> Vec2 {
        match self {
            HandLayer::Shadow => SHADOW_PIVOT_OFFSET,
            HandLayer::Solid => Vec2::zero(),
        }
    }

    #[inline]
    pub fn color(self, hand: Hand) -> Color {
        match self {
            HandLayer::Shadow => palette::HAND_SHADOW,
            HandLayer::Solid => hand.color(),
        }
    }
}

/// Per-frame painter: restores the cached face, then hands and pin on top.
#[derive(Debug, Copy, Clone)]
pub struct HandAnimator {
    geometry: FaceGeometry,
}

impl HandAnimator {
    pub fn new(geometry: FaceGeometry) -> Self {
        Self { geometry }
    }

    /// Outline of `hand` rotated for `t` and moved onto the layer's pivot.
    pub fn placed_outline(&self, hand: Hand, t: &ClockTime, layer: HandLayer) -> Vec<Vec2> {
        let angle = hand.angle(t);
        let pivot = self.geometry.center() + layer.pivot_offset();
        hand.outline(self.geometry.width())
            .into_iter()
            .map(|v| pivot + v.rotated(angle))
            .collect()
    }

    pub fn draw_hand(&self, surface: &mut Surface, hand: Hand, t: &ClockTime, layer: HandLayer) {
        let shape = Shape::Polygon(self.placed_outline(hand, t, layer));
        surface.fill(&shape, &Paint::Solid(layer.color(hand)), &DrawOptions::default());
    }

    /// Paints one full frame over `face`.
    pub fn draw(&self, surface: &mut Surface, face: &FaceImage, t: &ClockTime) -> Result<(), RasterError> {
        surface.restore(face)?;

        for hand in Hand::ALL {
            self.draw_hand(surface, hand, t, HandLayer::Shadow);
            self.draw_hand(surface, hand, t, HandLayer::Solid);
        }
        self.draw_pin(surface);
        Ok(())
    }

    fn draw_pin(&self, surface: &mut Surface) {
        let center = self.geometry.center();
        let opts = DrawOptions::default();
        surface.fill(&Shape::circle(center, PIN_OUTER_RADIUS), &palette::PIN_OUTER.into(), &opts);
        surface.fill(&Shape::circle(center, PIN_INNER_RADIUS), &palette::PIN_INNER.into(), &opts);
    }
}
