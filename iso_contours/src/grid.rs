//! Validated, read-only view of a row-major scalar grid.
use crate::{core::traits::Real, error::ContourError};

/// Immutable row-major grid of samples, `width` columns by `height` rows.
///
/// Sample `(col, row)` is stored at `values[row * width + col]`. In grid space the sample sits at
/// the center of its unit pixel, i.e. at `(col + 0.5, row + 0.5)`, so the whole grid spans
/// `[0, width] x [0, height]`.
#[derive(Debug, Copy, Clone)]
pub struct Grid<'a, T = f64> {
    values: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T> Grid<'a, T>
where
    T: Real,
{
    /// Create a grid view, checking that `values.len() == width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iso_contours::grid::Grid;
    /// # use iso_contours::error::ContourError;
    /// let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    /// let grid = Grid::new(&values, 3, 2).unwrap();
    /// assert_eq!(grid.value(2, 1), 5.0);
    /// assert!(matches!(
    ///     Grid::new(&values, 4, 2),
    ///     Err(ContourError::DimensionMismatch { expected: 8, actual: 6, .. })
    /// ));
    /// ```
    pub fn new(values: &'a [T], width: usize, height: usize) -> Result<Self, ContourError> {
        check_dimensions(values.len(), width, height)?;
        Ok(Self {
            values,
            width,
            height,
        })
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
    pub fn values(&self) -> &'a [T] {
        self.values
    }

    /// Returns true if the grid has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at column `col` and row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= width` or `row >= height`.
    #[inline]
    pub fn value(&self, col: usize, row: usize) -> T {
        assert!(col < self.width, "column {col} out of range");
        self.values[row * self.width + col]
    }

    /// Sample at column `col` and row `row`, or `None` if outside the grid.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<T> {
        if col < self.width && row < self.height {
            Some(self.values[row * self.width + col])
        } else {
            None
        }
    }
}

/// Check that a grid of `width * height` samples holds exactly `len` values and that its
/// half-unit endpoint index space fits in an `i64`.
///
/// A grid with a zero dimension has no cells to trace, so only its length is checked.
pub(crate) fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), ContourError> {
    if width == 0 || height == 0 {
        return check_len(len, width, height, 0);
    }

    let too_large = ContourError::GridTooLarge { width, height };
    let expected = width.checked_mul(height).ok_or(too_large.clone())?;
    // endpoint keys reach (2 * width + 1) + 2 * height * (2 * width + 2)
    let lattice_w = width
        .checked_add(1)
        .and_then(|w| w.checked_mul(2))
        .ok_or(too_large.clone())?;
    let lattice_h = height
        .checked_add(1)
        .and_then(|h| h.checked_mul(2))
        .ok_or(too_large.clone())?;
    let key_space = lattice_w.checked_mul(lattice_h).ok_or(too_large.clone())?;
    if i64::try_from(key_space).is_err() {
        return Err(too_large);
    }

    check_len(len, width, height, expected)
}

#[inline]
fn check_len(len: usize, width: usize, height: usize, expected: usize) -> Result<(), ContourError> {
    if len != expected {
        return Err(ContourError::DimensionMismatch {
            width,
            height,
            expected,
            actual: len,
        });
    }

    Ok(())
}
