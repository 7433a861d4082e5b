/// Errors raised by raster surface operations.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum RasterError {
    #[error("surface dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("image is {found:?} but surface is {expected:?}")]
    SizeMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}
