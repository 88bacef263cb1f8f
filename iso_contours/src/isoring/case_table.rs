//! Marching squares case table.
//!
//! A cell is the 2x2 block of samples whose top left sample is at column `x`, row `y`. Its 4-bit
//! case code has one bit per corner set when the corner sample is at or above the threshold:
//!
//! ```text
//!   bit 3 (top left) ---- bit 2 (top right)
//!        |                      |
//!   bit 0 (bottom left) - bit 1 (bottom right)
//! ```
//!
//! Segment endpoints are stored in half units relative to the cell origin (1 = 0.5, 2 = 1.0,
//! 3 = 1.5). With samples centered on their pixels at `(col + 0.5, row + 0.5)`, every endpoint is
//! the midpoint between two adjacent samples, so endpoints produced by neighboring cells coincide
//! exactly and can be matched by integer keys.
//!
//! Segments are directed so that samples at or above the threshold are on the same side of every
//! segment, which is what makes the signed area of a closed ring tell outer rings from holes.
use crate::core::{math::Vector2, traits::Real};

/// Corner bit for the bottom left sample of a cell (column `x`, row `y + 1`).
pub const BOTTOM_LEFT: usize = 1;
/// Corner bit for the bottom right sample of a cell (column `x + 1`, row `y + 1`).
pub const BOTTOM_RIGHT: usize = 1 << 1;
/// Corner bit for the top right sample of a cell (column `x + 1`, row `y`).
pub const TOP_RIGHT: usize = 1 << 2;
/// Corner bit for the top left sample of a cell (column `x`, row `y`).
pub const TOP_LEFT: usize = 1 << 3;

/// Point on the half unit lattice: the grid space point is `(x / 2, y / 2)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfPoint {
    pub x: i64,
    pub y: i64,
}

impl HalfPoint {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        HalfPoint { x, y }
    }

    /// Grid space position of the lattice point.
    #[inline]
    pub fn to_point<T>(self) -> Vector2<T>
    where
        T: Real,
    {
        Vector2::new(
            T::from(self.x).unwrap() * T::half(),
            T::from(self.y).unwrap() * T::half(),
        )
    }
}

/// Directed segment of the case table in cell local half units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CaseSegment {
    pub start: HalfPoint,
    pub end: HalfPoint,
}

impl CaseSegment {
    const fn new(start_x: i64, start_y: i64, end_x: i64, end_y: i64) -> Self {
        CaseSegment {
            start: HalfPoint::new(start_x, start_y),
            end: HalfPoint::new(end_x, end_y),
        }
    }

    /// Segment endpoints on the grid lattice for the cell whose top left sample is at column
    /// `cell_x`, row `cell_y` (either may be `-1` for the boundary cells outside the grid).
    #[inline]
    pub fn translate(&self, cell_x: isize, cell_y: isize) -> (HalfPoint, HalfPoint) {
        let dx = 2 * cell_x as i64;
        let dy = 2 * cell_y as i64;
        (
            HalfPoint::new(self.start.x + dx, self.start.y + dy),
            HalfPoint::new(self.end.x + dx, self.end.y + dy),
        )
    }

    /// Segment endpoints in fractional cell local coordinates (0.5, 1.0 or 1.5).
    #[inline]
    pub fn cell_local<T>(&self) -> (Vector2<T>, Vector2<T>)
    where
        T: Real,
    {
        (self.start.to_point(), self.end.to_point())
    }
}

const NONE: &[CaseSegment] = &[];

/// Segments for every case code.
///
/// The saddle codes 5 and 10 (diagonal corners above) always use the same two segment topology
/// which keeps the above corners apart, regardless of the value at the cell center.
pub const CASE_TABLE: [&[CaseSegment]; 16] = [
    NONE,
    &[CaseSegment::new(2, 3, 1, 2)],
    &[CaseSegment::new(3, 2, 2, 3)],
    &[CaseSegment::new(3, 2, 1, 2)],
    &[CaseSegment::new(2, 1, 3, 2)],
    &[CaseSegment::new(2, 3, 1, 2), CaseSegment::new(2, 1, 3, 2)],
    &[CaseSegment::new(2, 1, 2, 3)],
    &[CaseSegment::new(2, 1, 1, 2)],
    &[CaseSegment::new(1, 2, 2, 1)],
    &[CaseSegment::new(2, 3, 2, 1)],
    &[CaseSegment::new(1, 2, 2, 1), CaseSegment::new(3, 2, 2, 3)],
    &[CaseSegment::new(3, 2, 2, 1)],
    &[CaseSegment::new(1, 2, 3, 2)],
    &[CaseSegment::new(2, 3, 3, 2)],
    &[CaseSegment::new(1, 2, 2, 3)],
    NONE,
];

/// Segments for the 4-bit case `code`.
///
/// # Panics
///
/// Panics if `code > 15`.
#[inline]
pub fn case_segments(code: usize) -> &'static [CaseSegment] {
    CASE_TABLE[code]
}

/// Compose a case code from the 4 corner classifications.
#[inline]
pub fn case_code(bottom_left: bool, bottom_right: bool, top_right: bool, top_left: bool) -> usize {
    let mut code = 0;
    if bottom_left {
        code |= BOTTOM_LEFT;
    }
    if bottom_right {
        code |= BOTTOM_RIGHT;
    }
    if top_right {
        code |= TOP_RIGHT;
    }
    if top_left {
        code |= TOP_LEFT;
    }
    code
}
