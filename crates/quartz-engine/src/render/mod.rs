//! GPU presentation of CPU surfaces.
//!
//! The clock paints on the CPU; this subsystem only uploads the finished
//! surface and draws it as one textured quad.
//!
//! Convention:
//! - Quad geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod blit;
mod ctx;

pub use blit::{fit_quad, SurfaceBlitter};
pub use ctx::{RenderCtx, RenderTarget};
