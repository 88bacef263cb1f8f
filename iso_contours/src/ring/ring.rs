use super::{
    PointContainment, RingRole, ring_contains_point, ring_contains_ring, ring_role,
    signed_double_area,
};
use crate::{
    contour::GridTransform,
    core::{math::Vector2, traits::Real},
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Closed sequence of points.
///
/// Rings emitted by the tracer repeat their first point as their last point, e.g. the boundary of
/// a 3x5 block of samples has 16 distinct vertexes and 17 points.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring<T = f64> {
    /// Contiguous sequence of points.
    pub points: Vec<Vector2<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    /// Create a new empty ring.
    #[inline]
    pub fn new() -> Self {
        Ring { points: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_points(points: Vec<Vector2<T>>) -> Self {
        Ring { points }
    }

    /// Add a point at the end of the ring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    #[inline]
    pub fn add_point(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    /// Number of points, including the repeated closing point.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the ring has at least 4 points and its last point equals its first.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() >= 4 && first == last,
            _ => false,
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2<T>> {
        self.points.iter()
    }

    /// Twice the signed area, see [signed_double_area].
    #[inline]
    pub fn signed_double_area(&self) -> T {
        signed_double_area(&self.points)
    }

    /// Outer ring or hole, see [ring_role].
    #[inline]
    pub fn role(&self) -> RingRole {
        ring_role(&self.points)
    }

    /// Bounding box of the ring, `None` if it has no points.
    pub fn extents(&self) -> Option<AABB<T>> {
        let first = self.points.first()?;
        let mut result = AABB::new(first.x, first.y, first.x, first.y);
        for p in self.points.iter().skip(1) {
            result.min_x = num_traits::real::Real::min(result.min_x, p.x);
            result.min_y = num_traits::real::Real::min(result.min_y, p.y);
            result.max_x = num_traits::real::Real::max(result.max_x, p.x);
            result.max_y = num_traits::real::Real::max(result.max_y, p.y);
        }

        Some(result)
    }

    /// Test a point against this ring, see [ring_contains_point].
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> PointContainment {
        ring_contains_point(&self.points, point)
    }

    /// Test another ring against this ring, see [ring_contains_ring].
    #[inline]
    pub fn contains_ring(&self, other: &Ring<T>) -> PointContainment {
        ring_contains_ring(&self.points, &other.points)
    }

    /// Apply `f` to every point in place.
    #[inline]
    pub fn map_points_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(Vector2<T>) -> Vector2<T>,
    {
        for p in self.points.iter_mut() {
            *p = f(*p);
        }
    }

    /// Map every point from grid space to world space.
    #[inline]
    pub fn transform(&mut self, transform: &GridTransform<T>) {
        self.map_points_mut(|p| transform.apply(p));
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a Vector2<T>;
    type IntoIter = std::slice::Iter<'a, Vector2<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T> FromIterator<Vector2<T>> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Ring {
            points: iter.into_iter().collect(),
        }
    }
}
