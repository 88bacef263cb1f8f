use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use iso_contours::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Returns true if `q` lies in the closed interval spanned by `p` and `r` (in either order).
///
/// # Examples
///
/// ```
/// # use iso_contours::core::math::*;
/// assert!(within_closed(1.0, 1.5, 2.0));
/// assert!(within_closed(2.0, 1.5, 1.0));
/// assert!(within_closed(1.0, 1.0, 2.0));
/// assert!(!within_closed(1.0, 2.5, 2.0));
/// ```
#[inline]
pub fn within_closed<T>(p: T, q: T, r: T) -> bool
where
    T: PartialOrd + Copy,
{
    let (lo, hi) = min_max(p, r);
    lo <= q && q <= hi
}

/// Returns true if the points `a`, `b` and `c` are collinear, using `epsilon` on the cross
/// product of `b - a` and `c - a`.
///
/// # Examples
///
/// ```
/// # use iso_contours::core::math::*;
/// assert!(is_collinear_eps(vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(1.0, 1.0), 1e-12));
/// assert!(!is_collinear_eps(vec2(0.0, 0.0), vec2(2.0, 2.0), vec2(1.0, 1.5), 1e-12));
/// ```
#[inline]
pub fn is_collinear_eps<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>, epsilon: T) -> bool
where
    T: Real,
{
    (b - a).perp_dot(c - a).abs() < epsilon
}
