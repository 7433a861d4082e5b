//! GPU device + swapchain for the presentation window.
//!
//! - [`GpuInit`]: adapter/surface preferences
//! - [`Gpu`]: instance, device, queue and the configured window surface
//! - [`GpuFrame`]: one acquired swapchain texture plus its encoder

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
