use crate::{core::traits::Real, grid::Grid, ring::Ring};

/// Linearly interpolate the vertexes of a grid space `ring` traced from `grid` at `threshold`.
///
/// Every traced vertex is the midpoint between two adjacent samples, so it lies either on an
/// integer x (between a sample and its left neighbor) or on an integer y (between a sample and the
/// one above). For vertexes on such a line strictly inside the grid the matching coordinate is
/// moved to where the threshold falls between the two samples:
///
/// `coord + (threshold - v0) / (v1 - v0) - 0.5`
///
/// where `v0` is the sample before the line and `v1` the sample after it. Vertexes on the outer
/// grid boundary are left alone since only one side has a sample.
///
/// A vertex is skipped (keeps its coordinate) when the two samples are equal or the interpolated
/// offset is not finite, e.g. because a sample is `NaN`. Returns the number of vertexes skipped.
///
/// # Examples
///
/// ```
/// # use iso_contours::contour::smooth_linear;
/// # use iso_contours::grid::Grid;
/// # use iso_contours::isoring::IsoRingTracer;
/// let values = [0.0, 1.0, 1.0, 0.0];
/// let grid = Grid::new(&values, 4, 1).unwrap();
/// let mut rings = IsoRingTracer::new().trace_grid(&grid, 0.25);
/// let ring = &mut rings[0];
/// assert!(ring.iter().any(|p| p.x == 1.0));
/// assert_eq!(smooth_linear(ring, &grid, 0.25), 0);
/// // threshold crossing between the 0.0 and 1.0 samples
/// assert!(ring.iter().any(|p| p.x == 0.75));
/// assert!(ring.iter().all(|p| p.x != 1.0));
/// ```
pub fn smooth_linear<T>(ring: &mut Ring<T>, grid: &Grid<'_, T>, threshold: T) -> usize
where
    T: Real,
{
    let width = T::from(grid.width()).unwrap();
    let height = T::from(grid.height()).unwrap();
    let mut skipped = 0;

    for i in 0..ring.vertex_count() {
        let point = ring[i];
        let x_floor = point.x.floor();
        let y_floor = point.y.floor();

        if point.x == x_floor && point.x > T::zero() && point.x < width {
            let (Some(col), Some(row)) = (x_floor.to_usize(), y_floor.to_usize()) else {
                continue;
            };
            let samples = grid
                .get(col - 1, row)
                .zip(grid.get(col, row))
                .and_then(|(v0, v1)| interpolation_offset(v0, v1, threshold));
            match samples {
                Some(offset) => ring[i].x = point.x + offset,
                None => skipped += 1,
            }
        } else if point.y == y_floor && point.y > T::zero() && point.y < height {
            let (Some(col), Some(row)) = (x_floor.to_usize(), y_floor.to_usize()) else {
                continue;
            };
            let samples = grid
                .get(col, row - 1)
                .zip(grid.get(col, row))
                .and_then(|(v0, v1)| interpolation_offset(v0, v1, threshold));
            match samples {
                Some(offset) => ring[i].y = point.y + offset,
                None => skipped += 1,
            }
        }
    }

    skipped
}

/// Offset from the midpoint between samples `v0` and `v1` to where `threshold` falls, `None` if
/// the samples are equal or the offset is not finite.
#[inline]
fn interpolation_offset<T>(v0: T, v1: T, threshold: T) -> Option<T>
where
    T: Real,
{
    let denominator = v1 - v0;
    if denominator == T::zero() {
        return None;
    }

    let offset = (threshold - v0) / denominator - T::half();
    offset.is_finite().then_some(offset)
}
