/// Approximate equality for floating point values.
///
/// Smoothed and transformed vertexes come out of floating point arithmetic, so tests and callers
/// comparing them should use this rather than `==`.
///
/// # Examples
///
/// ```
/// # use iso_contours::core::traits::*;
/// let x = 1.0 + (0.25 - 0.0) / (1.0 - 0.0) - 0.5;
/// assert!(x.fuzzy_eq(0.75));
/// assert!(!x.fuzzy_eq_eps(0.76, 1e-3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);
