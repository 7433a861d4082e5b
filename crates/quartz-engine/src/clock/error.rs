use crate::surface::RasterError;

/// Errors raised while constructing or driving a clock.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("no surface registered under id {0:?}")]
    UnknownSurface(String),

    #[error(transparent)]
    Raster(#[from] RasterError),
}
