//! Time subsystem.
//!
//! - [`TimeSource`]: wall-clock UTC provider (system or manual)
//! - [`ClockTime`] / [`TimeOffset`]: the hand positions derived from it
//! - [`FrameClock`]: per-window frame pacing for the presentation runtime

mod clock_time;
mod frame_clock;
mod source;

pub use clock_time::{ClockTime, TimeOffset};
pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualTimeSource, SystemTimeSource, TimeSource};
