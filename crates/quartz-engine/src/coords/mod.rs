//! Coordinate types shared by the rasterizer, clock geometry and presenter.
//!
//! Canonical CPU space:
//! - Surface pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are radians; positive rotation is clockwise on screen because +Y
//! points down.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
