use super::{Stitcher, case_segments};
use crate::{core::traits::Real, error::ContourError, grid::Grid, ring::Ring};

/// Traces the closed isorings of a grid at a threshold.
///
/// The grid is padded on all 4 sides by a virtual row/column of samples below every threshold, so
/// every ring closes inside `[0, width] x [0, height]`. Samples are classified as above when
/// `value >= threshold`; `NaN` samples are never above.
///
/// The tracer owns a [Stitcher] whose allocations are reused across calls, so tracing many
/// thresholds with one tracer avoids reallocating the fragment storage each time.
///
/// # Examples
///
/// ```
/// # use iso_contours::isoring::IsoRingTracer;
/// let values = [
///     0.0, 0.0, 0.0,
///     0.0, 1.0, 0.0,
///     0.0, 0.0, 0.0,
/// ];
/// let mut tracer = IsoRingTracer::new();
/// let rings = tracer.trace(&values, 3, 3, 0.5).unwrap();
/// assert_eq!(rings.len(), 1);
/// // diamond around the center sample plus the repeated closing point
/// assert_eq!(rings[0].vertex_count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct IsoRingTracer<T = f64> {
    stitcher: Stitcher<T>,
}

impl<T> IsoRingTracer<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            stitcher: Stitcher::new(0),
        }
    }

    /// Validate `values` as a `width` by `height` grid and trace it at `threshold`.
    pub fn trace(
        &mut self,
        values: &[T],
        width: usize,
        height: usize,
        threshold: T,
    ) -> Result<Vec<Ring<T>>, ContourError> {
        let grid = Grid::new(values, width, height)?;
        Ok(self.trace_grid(&grid, threshold))
    }

    /// Trace `grid` at `threshold`, returning the rings in grid space in the order they close.
    ///
    /// Every returned ring repeats its first point as its last point. Rings with positive
    /// [signed double area](crate::ring::signed_double_area) enclose above threshold samples
    /// (outer rings), rings with negative area enclose below threshold samples (holes).
    pub fn trace_grid(&mut self, grid: &Grid<'_, T>, threshold: T) -> Vec<Ring<T>> {
        let width = grid.width();
        let height = grid.height();
        let values = grid.values();
        self.stitcher.reset(width);

        let mut rings = Vec::new();
        if grid.is_empty() {
            return rings;
        }

        let above = |i: usize| -> usize { (values[i] >= threshold) as usize };

        let above_count = values.iter().filter(|&&v| v >= threshold).count();
        if above_count == 0 || above_count == values.len() {
            log::trace!(
                "grid {width}x{height} is uniform at threshold {threshold:?}, no rings traced"
            );
            return rings;
        }

        let w = width as isize;
        let h = height as isize;

        // first row: only the bottom corners are inside the grid
        let mut t1 = above(0);
        self.emit(t1 << 1, -1, -1, &mut rings);
        for x in 0..width - 1 {
            let t0 = t1;
            t1 = above(x + 1);
            self.emit(t0 | t1 << 1, x as isize, -1, &mut rings);
        }
        self.emit(t1, w - 1, -1, &mut rings);

        // interior rows
        for y in 0..height - 1 {
            let row = y * width;
            let next = row + width;
            let mut t1 = above(next);
            let mut t2 = above(row);
            self.emit(t1 << 1 | t2 << 2, -1, y as isize, &mut rings);
            for x in 0..width - 1 {
                let t0 = t1;
                t1 = above(next + x + 1);
                let t3 = t2;
                t2 = above(row + x + 1);
                self.emit(t0 | t1 << 1 | t2 << 2 | t3 << 3, x as isize, y as isize, &mut rings);
            }
            self.emit(t1 | t2 << 3, w - 1, y as isize, &mut rings);
        }

        // last row: only the top corners are inside the grid
        let row = (height - 1) * width;
        let mut t2 = above(row);
        self.emit(t2 << 2, -1, h - 1, &mut rings);
        for x in 0..width - 1 {
            let t3 = t2;
            t2 = above(row + x + 1);
            self.emit(t2 << 2 | t3 << 3, x as isize, h - 1, &mut rings);
        }
        self.emit(t2 << 3, w - 1, h - 1, &mut rings);

        let leftover = self.stitcher.finish();
        debug_assert_eq!(leftover, 0, "trace left open fragments");

        log::trace!(
            "traced {} ring(s) at threshold {threshold:?} over {width}x{height} grid",
            rings.len()
        );
        rings
    }

    #[inline]
    fn emit(&mut self, code: usize, cell_x: isize, cell_y: isize, rings: &mut Vec<Ring<T>>) {
        for segment in case_segments(code) {
            let (start, end) = segment.translate(cell_x, cell_y);
            self.stitcher.stitch(start, end, rings);
        }
    }
}

impl<T> Default for IsoRingTracer<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
