#![allow(dead_code)]

use iso_contours::{
    core::math::Vector2,
    ring::{Polygon, Ring},
};

/// Build a row-major `width` by `height` grid of zeros with every `(col, row, value)` sample set.
pub fn grid_with_samples(width: usize, height: usize, samples: &[(usize, usize, f64)]) -> Vec<f64> {
    let mut values = vec![0.0; width * height];
    for &(col, row, value) in samples {
        values[row * width + col] = value;
    }
    values
}

/// Build a row-major `width` by `height` grid of zeros with every `(col, row, w, h)` block of
/// samples set to 1.0.
pub fn grid_with_blocks(
    width: usize,
    height: usize,
    blocks: &[(usize, usize, usize, usize)],
) -> Vec<f64> {
    let mut values = vec![0.0; width * height];
    for &(col, row, w, h) in blocks {
        for r in row..row + h {
            for c in col..col + w {
                values[r * width + c] = 1.0;
            }
        }
    }
    values
}

/// Parse a grid drawn as rows of `#` (1.0) and `.` (0.0), returning `(values, width, height)`.
pub fn grid_from_art(rows: &[&str]) -> (Vec<f64>, usize, usize) {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut values = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "all rows must have the same width");
        values.extend(row.chars().map(|c| if c == '#' { 1.0 } else { 0.0 }));
    }
    (values, width, height)
}

/// Returns true if `v` is a multiple of 0.5.
pub fn on_half_lattice(v: f64) -> bool {
    (v * 2.0).fract() == 0.0
}

/// Assert every point of the ring lies on the half unit lattice inside `[0, width] x [0, height]`.
pub fn assert_ring_on_lattice(ring: &Ring<f64>, width: usize, height: usize) {
    for p in ring.iter() {
        assert!(
            on_half_lattice(p.x) && on_half_lattice(p.y),
            "point {p:?} is not on the half unit lattice"
        );
        assert!(
            p.x >= 0.0 && p.x <= width as f64 && p.y >= 0.0 && p.y <= height as f64,
            "point {p:?} is outside the grid extent"
        );
    }
}

/// Map grid space points through `world = grid * step + origin`.
pub fn to_world(p: Vector2<f64>, origin: (f64, f64), step: (f64, f64)) -> Vector2<f64> {
    Vector2::new(p.x * step.0 + origin.0, p.y * step.1 + origin.1)
}

/// Number of holes per polygon, in polygon order.
pub fn hole_counts(polygons: &[Polygon<f64>]) -> Vec<usize> {
    polygons.iter().map(|p| p.interiors.len()).collect()
}
