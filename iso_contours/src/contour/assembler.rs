use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::{
    core::traits::Real,
    ring::{PointContainment, Polygon, Ring, RingRole},
};

/// Polygons assembled from the rings of one trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly<T = f64> {
    /// One polygon per outer ring, in the order the outer rings were given.
    pub polygons: Vec<Polygon<T>>,
    /// Holes no outer ring contains. Always empty for rings from a single consistent trace.
    pub unclaimed_holes: Vec<Ring<T>>,
}

/// Groups the closed rings of one trace into polygons.
///
/// Rings with positive [signed double area](crate::ring::signed_double_area) become polygon
/// exteriors, all others are holes. Each hole goes to the first outer ring (in input order) that
/// does not report it as [PointContainment::Outside]. Outer ring bounding boxes are packed into a
/// [StaticAABB2DIndex] so each hole is only tested against the outer rings whose boxes overlap its
/// own.
///
/// The assembler keeps its query stack between calls.
#[derive(Debug, Clone, Default)]
pub struct ContourAssembler {
    query_stack: Vec<usize>,
}

impl ContourAssembler {
    pub fn new() -> Self {
        Self {
            query_stack: Vec::new(),
        }
    }

    pub fn assemble<T>(&mut self, rings: Vec<Ring<T>>) -> Assembly<T>
    where
        T: Real,
    {
        let mut polygons = Vec::new();
        let mut holes = Vec::new();
        for ring in rings {
            match ring.role() {
                RingRole::Outer => polygons.push(Polygon::new(ring)),
                RingRole::Hole => holes.push(ring),
            }
        }

        let mut unclaimed_holes = Vec::new();
        if holes.is_empty() {
            return Assembly {
                polygons,
                unclaimed_holes,
            };
        }

        let outer_index = Self::build_index(&polygons);
        let mut candidates = Vec::new();
        for hole in holes {
            let Some(bounds) = hole.extents() else {
                unclaimed_holes.push(hole);
                continue;
            };

            candidates.clear();
            if let Some(index) = &outer_index {
                candidates.extend(index.query_with_stack(
                    bounds.min_x,
                    bounds.min_y,
                    bounds.max_x,
                    bounds.max_y,
                    &mut self.query_stack,
                ));
            } else {
                candidates.extend(0..polygons.len());
            }
            // index query order is unspecified, first match must follow emission order
            candidates.sort_unstable();

            let owner = candidates.iter().copied().find(|&i| {
                polygons[i].exterior.contains_ring(&hole) != PointContainment::Outside
            });

            match owner {
                Some(i) => polygons[i].interiors.push(hole),
                None => unclaimed_holes.push(hole),
            }
        }

        if !unclaimed_holes.is_empty() {
            log::warn!(
                "{} hole ring(s) not contained by any outer ring were dropped",
                unclaimed_holes.len()
            );
        }

        Assembly {
            polygons,
            unclaimed_holes,
        }
    }

    fn build_index<T>(polygons: &[Polygon<T>]) -> Option<StaticAABB2DIndex<T>>
    where
        T: Real,
    {
        if polygons.is_empty() {
            return None;
        }

        let mut builder = StaticAABB2DIndexBuilder::new(polygons.len());
        for polygon in polygons {
            // outer rings always have points, fall back to an empty box to keep positions aligned
            let (min_x, min_y, max_x, max_y) = polygon
                .exterior
                .extents()
                .map(|b| (b.min_x, b.min_y, b.max_x, b.max_y))
                .unwrap_or((T::zero(), T::zero(), T::zero(), T::zero()));
            builder.add(min_x, min_y, max_x, max_y);
        }

        match builder.build() {
            Ok(index) => Some(index),
            Err(err) => {
                log::error!("failed to build outer ring index, scanning all outer rings: {err:?}");
                None
            }
        }
    }
}
