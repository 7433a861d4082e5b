//! Fixed clock colors.

use crate::paint::Color;

pub const RIM: Color = Color::from_hex(0x5F4428);
pub const DIAL: Color = Color::from_hex(0xCCCCCC);
pub const BEVEL_HIGHLIGHT: Color = Color::from_hex_rgba(0xFEFEFEFF);
pub const BEVEL_LINE: Color = Color::BLACK;
pub const INK: Color = Color::from_hex(0x413136);
pub const TICK: Color = Color::BLACK;

pub const HAND: Color = Color::from_hex(0x312136);
pub const SECOND_HAND: Color = Color::from_hex(0xEE1116);
pub const HAND_SHADOW: Color = Color::from_hex_rgba(0x10060A33);

pub const PIN_OUTER: Color = Color::from_hex(0xD40000);
pub const PIN_INNER: Color = Color::from_hex(0x828170);

/// Alpha of the left-edge vignette.
pub const SHADING_ALPHA: f32 = 0.15;
