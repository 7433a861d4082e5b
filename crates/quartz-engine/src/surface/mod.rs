//! CPU raster surface the clock paints onto.
//!
//! A [`Surface`] wraps a premultiplied RGBA `tiny_skia` pixmap and exposes the
//! handful of 2D operations the clock needs: filled and stroked shapes,
//! composite rules, hard drop shadows, clip masks, glyph coverage blits and
//! whole-surface snapshots ([`FaceImage`]).
//!
//! Surfaces are acquired either by creating one or by taking a pre-existing
//! one from a [`SurfaceProvider`] such as [`SurfaceRegistry`].

mod error;
mod image;
mod raster;
mod registry;
mod shape;

pub use error::RasterError;
pub use image::FaceImage;
pub use raster::{ClipMask, DrawOptions, Shadow, Surface};
pub use registry::{SurfaceProvider, SurfaceRegistry};
pub use shape::Shape;
