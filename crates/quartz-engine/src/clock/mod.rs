//! The analog clock component.
//!
//! [`ClockRenderer`] owns one surface. Construction runs the [`FaceBuilder`]
//! exactly once and keeps the resulting [`FaceImage`](crate::surface::FaceImage);
//! every frame the [`HandAnimator`] restores that image and draws the hands.
//! [`AnimationHandle`] is the start/stop-able loop a host drives from its
//! display-refresh callback.

mod animation;
mod error;
mod face;
mod geometry;
mod hands;
mod options;
pub mod palette;
mod renderer;

pub use animation::AnimationHandle;
pub use error::ClockError;
pub use face::{FaceBuilder, FaceFonts, BRAND_TEXT};
pub use geometry::{numeral_angle, tick_angle, tick_width, FaceGeometry, Numeral, TickMark};
pub use hands::{Hand, HandAnimator, HandLayer};
pub use options::{ClockOptions, DEFAULT_SIZE};
pub use renderer::ClockRenderer;
