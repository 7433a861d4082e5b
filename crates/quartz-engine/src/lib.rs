//! Quartz engine crate.
//!
//! Rasterizes an analog clock onto a CPU surface and owns the platform + GPU
//! runtime pieces that present that surface once per display refresh.

pub mod clock;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod surface;
pub mod text;
pub mod time;
pub mod window;
