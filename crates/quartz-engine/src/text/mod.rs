//! Text subsystem.
//!
//! Fonts are parsed with `fontdue`; glyphs are rasterized to coverage bitmaps
//! and composited straight onto a [`Surface`](crate::surface::Surface).

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
