use thiserror::Error;

/// Errors reported by the contouring entry points.
///
/// All of them are precondition violations detected before any tracing is done, so a call either
/// computes every requested threshold or fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContourError {
    /// The number of grid values does not match `width * height`.
    #[error("grid of {width}x{height} requires {expected} values but {actual} were given")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// The grid dimensions overflow the addressable sample or endpoint index space.
    #[error("grid of {width}x{height} is too large to contour")]
    GridTooLarge { width: usize, height: usize },
}
