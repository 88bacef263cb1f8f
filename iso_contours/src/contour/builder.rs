use super::{
    Assembly, ContourAssembler, ContourGeometry, ContourMode, ContourOptions, ContourResult,
    GridTransform, smooth_linear,
};
use crate::{
    core::traits::Real, error::ContourError, grid::Grid, isoring::IsoRingTracer, ring::Ring,
};

/// Computes contours of a `width` by `height` grid at any number of thresholds.
///
/// Each threshold is traced independently: trace, then optional [smoothing](smooth_linear), then
/// (for [ContourMode::Polygons]) hole assignment, then the [GridTransform]. Hole assignment runs
/// before the transform so the outer/hole decision does not depend on the sign of the steps.
///
/// Results are returned in the order of the given thresholds. Duplicate thresholds are allowed
/// and produce identical results.
///
/// # Examples
///
/// ```
/// # use iso_contours::contour::{ContourBuilder, GridTransform};
/// let values = [
///     0.0, 0.0, 0.0, 0.0,
///     0.0, 1.0, 2.0, 0.0,
///     0.0, 0.0, 0.0, 0.0,
/// ];
/// let builder = ContourBuilder::new(4, 3).transform(GridTransform::new(10.0, 20.0, 2.0, 2.0));
/// let results = builder.contours(&values, &[0.5, 1.5]).unwrap();
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].threshold, 0.5);
/// let polygons = results[0].polygons().unwrap();
/// assert_eq!(polygons.len(), 1);
/// assert!(polygons[0].interiors.is_empty());
/// // every point lies inside the transformed grid extent
/// assert!(polygons[0].exterior.iter().all(|p| p.x >= 10.0 && p.x <= 18.0));
/// ```
#[derive(Debug, Clone)]
pub struct ContourBuilder<T = f64> {
    width: usize,
    height: usize,
    options: ContourOptions<T>,
}

impl<T> ContourBuilder<T>
where
    T: Real,
{
    /// Create a builder for grids of `width` columns and `height` rows with default options.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            options: ContourOptions::new(),
        }
    }

    /// Replace all options.
    pub fn with_options(mut self, options: ContourOptions<T>) -> Self {
        self.options = options;
        self
    }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.options.smooth = smooth;
        self
    }

    pub fn transform(mut self, transform: GridTransform<T>) -> Self {
        self.options.transform = transform;
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn options(&self) -> &ContourOptions<T> {
        &self.options
    }

    /// Isolines at every threshold, see [ContourMode::Lines].
    pub fn lines(
        &self,
        values: &[T],
        thresholds: &[T],
    ) -> Result<Vec<ContourResult<T>>, ContourError> {
        self.compute(values, thresholds, ContourMode::Lines)
    }

    /// Filled contours at every threshold, see [ContourMode::Polygons].
    pub fn contours(
        &self,
        values: &[T],
        thresholds: &[T],
    ) -> Result<Vec<ContourResult<T>>, ContourError> {
        self.compute(values, thresholds, ContourMode::Polygons)
    }

    /// Compute one result per threshold.
    ///
    /// Fails with [ContourError::DimensionMismatch] before any tracing if
    /// `values.len() != width * height`. One tracer is reused for all thresholds.
    pub fn compute(
        &self,
        values: &[T],
        thresholds: &[T],
        mode: ContourMode,
    ) -> Result<Vec<ContourResult<T>>, ContourError> {
        let grid = Grid::new(values, self.width, self.height)?;
        log::debug!(
            "contouring {}x{} grid at {} threshold(s) in {:?} mode",
            self.width,
            self.height,
            thresholds.len(),
            mode
        );

        let mut tracer = IsoRingTracer::new();
        let mut assembler = ContourAssembler::new();
        let results = thresholds
            .iter()
            .map(|&threshold| self.contour_at(&mut tracer, &mut assembler, &grid, threshold, mode))
            .collect();

        Ok(results)
    }

    /// Parallel variant of [ContourBuilder::compute], each worker thread traces with its own
    /// tracer. Returns exactly what [ContourBuilder::compute] returns.
    #[cfg(feature = "rayon")]
    pub fn compute_par(
        &self,
        values: &[T],
        thresholds: &[T],
        mode: ContourMode,
    ) -> Result<Vec<ContourResult<T>>, ContourError>
    where
        T: Send + Sync,
    {
        use rayon::prelude::*;

        let grid = Grid::new(values, self.width, self.height)?;
        log::debug!(
            "contouring {}x{} grid at {} threshold(s) in {:?} mode on {} thread(s)",
            self.width,
            self.height,
            thresholds.len(),
            mode,
            rayon::current_num_threads()
        );

        let results = thresholds
            .par_iter()
            .map_init(
                || (IsoRingTracer::new(), ContourAssembler::new()),
                |(tracer, assembler), &threshold| {
                    self.contour_at(tracer, assembler, &grid, threshold, mode)
                },
            )
            .collect();

        Ok(results)
    }

    fn contour_at(
        &self,
        tracer: &mut IsoRingTracer<T>,
        assembler: &mut ContourAssembler,
        grid: &Grid<'_, T>,
        threshold: T,
        mode: ContourMode,
    ) -> ContourResult<T> {
        let mut rings = tracer.trace_grid(grid, threshold);

        if self.options.smooth {
            let skipped: usize = rings
                .iter_mut()
                .map(|ring| smooth_linear(ring, grid, threshold))
                .sum();
            if skipped > 0 {
                log::debug!(
                    "smoothing skipped {skipped} vertex(es) with degenerate samples at threshold {threshold:?}"
                );
            }
        }

        let transform = &self.options.transform;
        let geometry = match mode {
            ContourMode::Lines => {
                Self::transform_rings(rings.iter_mut(), transform);
                ContourGeometry::MultiLineString(rings)
            }
            ContourMode::Polygons => {
                let Assembly {
                    mut polygons,
                    unclaimed_holes: _,
                } = assembler.assemble(rings);
                Self::transform_rings(polygons.iter_mut().flat_map(|p| p.rings_mut()), transform);
                ContourGeometry::MultiPolygon(polygons)
            }
        };

        ContourResult::new(threshold, geometry)
    }

    fn transform_rings<'a, I>(rings: I, transform: &GridTransform<T>)
    where
        I: Iterator<Item = &'a mut Ring<T>>,
        T: 'a,
    {
        if transform.is_identity() {
            return;
        }

        for ring in rings {
            ring.transform(transform);
        }
    }
}
