use crate::{
    core::{math::Vector2, traits::Real},
    ring::{Polygon, Ring},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Affine map from grid space to world space, applied per axis as `world = grid * step + origin`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridTransform<T = f64> {
    /// World x coordinate of grid space x = 0.
    pub x_origin: T,
    /// World y coordinate of grid space y = 0.
    pub y_origin: T,
    /// World units per grid unit along x.
    pub x_step: T,
    /// World units per grid unit along y.
    pub y_step: T,
}

impl<T> GridTransform<T>
where
    T: Real,
{
    pub fn new(x_origin: T, y_origin: T, x_step: T, y_step: T) -> Self {
        Self {
            x_origin,
            y_origin,
            x_step,
            y_step,
        }
    }

    /// Transform that leaves grid space coordinates unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::one())
    }

    /// Returns true if applying the transform leaves every point unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x_origin == T::zero()
            && self.y_origin == T::zero()
            && self.x_step == T::one()
            && self.y_step == T::one()
    }

    /// Map a grid space point to world space.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iso_contours::contour::GridTransform;
    /// # use iso_contours::core::math::vec2;
    /// let transform = GridTransform::new(100.0, 200.0, 2.0, 2.0);
    /// assert_eq!(transform.apply(vec2(1.5, 0.5)), vec2(103.0, 201.0));
    /// ```
    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            point.x * self.x_step + self.x_origin,
            point.y * self.y_step + self.y_origin,
        )
    }
}

impl<T> Default for GridTransform<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

/// Options for [ContourBuilder](super::ContourBuilder).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContourOptions<T = f64> {
    /// Move ring vertexes off the half unit lattice by linearly interpolating the threshold
    /// between the two samples each vertex lies between.
    pub smooth: bool,
    /// Transform applied to every output point.
    pub transform: GridTransform<T>,
}

impl<T> ContourOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            smooth: false,
            transform: GridTransform::identity(),
        }
    }
}

impl<T> Default for ContourOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Output geometry kind requested from the builder.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContourMode {
    /// Bare closed rings (isolines).
    Lines,
    /// Outer rings with their holes (filled contours).
    Polygons,
}

/// Geometry computed for one threshold.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ContourGeometry<T = f64> {
    MultiLineString(Vec<Ring<T>>),
    MultiPolygon(Vec<Polygon<T>>),
}

impl<T> ContourGeometry<T>
where
    T: Real,
{
    /// Returns true if the geometry has no rings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            ContourGeometry::MultiLineString(rings) => rings.is_empty(),
            ContourGeometry::MultiPolygon(polygons) => polygons.is_empty(),
        }
    }

    /// Total number of rings, counting polygon holes.
    pub fn ring_count(&self) -> usize {
        match self {
            ContourGeometry::MultiLineString(rings) => rings.len(),
            ContourGeometry::MultiPolygon(polygons) => {
                polygons.iter().map(Polygon::ring_count).sum()
            }
        }
    }
}

/// Contour for a single threshold.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ContourResult<T = f64> {
    /// Threshold value the geometry was traced at.
    pub threshold: T,
    pub geometry: ContourGeometry<T>,
}

impl<T> ContourResult<T>
where
    T: Real,
{
    #[inline]
    pub fn new(threshold: T, geometry: ContourGeometry<T>) -> Self {
        Self {
            threshold,
            geometry,
        }
    }

    /// Rings of a line mode result, `None` for a polygon result.
    #[inline]
    pub fn rings(&self) -> Option<&[Ring<T>]> {
        match &self.geometry {
            ContourGeometry::MultiLineString(rings) => Some(rings),
            ContourGeometry::MultiPolygon(_) => None,
        }
    }

    /// Polygons of a polygon mode result, `None` for a line result.
    #[inline]
    pub fn polygons(&self) -> Option<&[Polygon<T>]> {
        match &self.geometry {
            ContourGeometry::MultiLineString(_) => None,
            ContourGeometry::MultiPolygon(polygons) => Some(polygons),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }
}
