//! Geometric predicates over point sequences.
//!
//! All predicates take the ring as a slice of points and treat it as closed: the edge from the
//! last point back to the first is always included. Rings emitted by the tracer repeat their first
//! point at the end, which only adds a zero length closing edge, so both forms give the same
//! answers.
use crate::core::{
    math::{Vector2, is_collinear_eps, within_closed},
    traits::Real,
};

/// Result of testing a point (or a ring) against a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointContainment {
    /// Strictly inside the ring.
    Inside,
    /// Strictly outside the ring.
    Outside,
    /// On one of the ring's edges (within floating point epsilon).
    OnBoundary,
}

/// Role of a closed ring produced by the tracer, decided by the sign of its area.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RingRole {
    /// Boundary enclosing samples at or above the threshold.
    Outer,
    /// Boundary enclosing samples below the threshold inside an outer ring.
    Hole,
}

/// Returns twice the signed area of the closed ring given by `points`.
///
/// The sum is `prev.y * curr.x - prev.x * curr.y` over every edge. With that orientation the
/// outer boundaries traced by [IsoRingTracer](crate::isoring::IsoRingTracer) come out positive
/// and holes negative. Note this is the negation of the common shoelace convention: it describes
/// the tracer's segment direction, not a general counter clockwise rule.
///
/// Returns zero for fewer than 3 points.
///
/// # Examples
///
/// ```
/// # use iso_contours::core::math::vec2;
/// # use iso_contours::ring::signed_double_area;
/// // diamond around a single sample, in the direction the tracer emits it
/// let diamond = [vec2(0.5, 0.0), vec2(0.0, 0.5), vec2(0.5, 1.0), vec2(1.0, 0.5)];
/// assert_eq!(signed_double_area(&diamond), 1.0);
/// let reversed: Vec<_> = diamond.iter().rev().copied().collect();
/// assert_eq!(signed_double_area(&reversed), -1.0);
/// ```
pub fn signed_double_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    let n = points.len();
    if n < 3 {
        return T::zero();
    }

    let mut double_area = T::zero();
    let mut prev = points[n - 1];
    for &curr in points {
        double_area = double_area + prev.y * curr.x - prev.x * curr.y;
        prev = curr;
    }

    double_area
}

/// Classify a closed ring as [RingRole::Outer] (positive area) or [RingRole::Hole] (zero or
/// negative area).
#[inline]
pub fn ring_role<T>(points: &[Vector2<T>]) -> RingRole
where
    T: Real,
{
    if signed_double_area(points) > T::zero() {
        RingRole::Outer
    } else {
        RingRole::Hole
    }
}

/// Returns true if `point` lies on the segment from `a` to `b` (collinear and inside the
/// segment's bounding box), using `T::epsilon()` for the collinearity test.
///
/// A zero length segment only contains its own position.
pub fn segment_contains_point<T>(a: Vector2<T>, b: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    is_collinear_eps(a, b, point, T::epsilon())
        && within_closed(a.x, point.x, b.x)
        && within_closed(a.y, point.y, b.y)
}

/// Test `point` against the closed ring given by `points`.
///
/// Returns [PointContainment::OnBoundary] as soon as the point is found on an edge, otherwise
/// counts crossings of a horizontal ray cast from the point and returns
/// [PointContainment::Inside] for an odd count.
///
/// # Examples
///
/// ```
/// # use iso_contours::core::math::vec2;
/// # use iso_contours::ring::*;
/// let square = [vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(2.0, 2.0), vec2(0.0, 2.0)];
/// assert_eq!(ring_contains_point(&square, vec2(1.0, 1.0)), PointContainment::Inside);
/// assert_eq!(ring_contains_point(&square, vec2(3.0, 1.0)), PointContainment::Outside);
/// assert_eq!(ring_contains_point(&square, vec2(2.0, 1.0)), PointContainment::OnBoundary);
/// ```
pub fn ring_contains_point<T>(points: &[Vector2<T>], point: Vector2<T>) -> PointContainment
where
    T: Real,
{
    let n = points.len();
    if n == 0 {
        return PointContainment::Outside;
    }

    let mut inside = false;
    let mut prev = points[n - 1];
    for &curr in points {
        if segment_contains_point(curr, prev, point) {
            return PointContainment::OnBoundary;
        }

        if (curr.y > point.y) != (prev.y > point.y)
            && point.x < (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x
        {
            inside = !inside;
        }

        prev = curr;
    }

    if inside {
        PointContainment::Inside
    } else {
        PointContainment::Outside
    }
}

/// Test the ring `inner` against the closed ring `outer`.
///
/// The first vertex of `inner` that is not on the boundary of `outer` decides the result. If every
/// vertex of `inner` lies on the boundary then [PointContainment::OnBoundary] is returned. Rings
/// produced by one trace never cross each other, so a single vertex is enough to decide.
pub fn ring_contains_ring<T>(outer: &[Vector2<T>], inner: &[Vector2<T>]) -> PointContainment
where
    T: Real,
{
    for &point in inner {
        match ring_contains_point(outer, point) {
            PointContainment::OnBoundary => continue,
            decided => return decided,
        }
    }

    PointContainment::OnBoundary
}
