use super::Ring;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One outer ring with zero or more hole rings nested inside it.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon<T = f64> {
    /// Outer boundary.
    pub exterior: Ring<T>,
    /// Holes, in the order the tracer emitted them.
    pub interiors: Vec<Ring<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon without holes.
    #[inline]
    pub fn new(exterior: Ring<T>) -> Self {
        Polygon {
            exterior,
            interiors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_interiors(exterior: Ring<T>, interiors: Vec<Ring<T>>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }

    /// Number of rings (exterior plus holes).
    #[inline]
    pub fn ring_count(&self) -> usize {
        1 + self.interiors.len()
    }

    /// Iterate over the exterior ring followed by the holes.
    #[inline]
    pub fn rings(&self) -> impl Iterator<Item = &Ring<T>> + '_ {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Mutable variant of [Polygon::rings].
    #[inline]
    pub fn rings_mut(&mut self) -> impl Iterator<Item = &mut Ring<T>> + '_ {
        std::iter::once(&mut self.exterior).chain(self.interiors.iter_mut())
    }
}
