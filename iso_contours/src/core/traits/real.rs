use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Real number type usable as a grid sample value and as a ring coordinate.
///
/// Implemented for `f32` and `f64`. The [IndexableNum] bound lets ring bounding boxes go straight
/// into a `static_aabb2d_index` spatial index.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// One half, the lattice spacing of traced vertexes in grid space.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Returns true if the value is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
