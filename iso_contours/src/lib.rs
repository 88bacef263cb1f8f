//! Marching squares isolines and filled contours over rectangular scalar grids.
//!
//! A grid of `width * height` row-major samples is traced at one or more thresholds. Each trace
//! classifies samples as at/above or below the threshold, emits the boundary segments of every
//! 2x2 block from a fixed [case table](isoring::CASE_TABLE), and stitches them into closed
//! [rings](ring::Ring). For filled contours the rings are grouped into
//! [polygons](ring::Polygon) of one outer ring plus its holes.
//!
//! Most uses go through [ContourBuilder](contour::ContourBuilder):
//!
//! ```
//! # use iso_contours::contour::ContourBuilder;
//! let values = [
//!     0.0, 0.0, 0.0, 0.0, 0.0,
//!     0.0, 1.0, 1.0, 1.0, 0.0,
//!     0.0, 1.0, 0.0, 1.0, 0.0,
//!     0.0, 1.0, 1.0, 1.0, 0.0,
//!     0.0, 0.0, 0.0, 0.0, 0.0,
//! ];
//! let results = ContourBuilder::new(5, 5).contours(&values, &[0.5]).unwrap();
//! let polygons = results[0].polygons().unwrap();
//! assert_eq!(polygons.len(), 1);
//! assert_eq!(polygons[0].interiors.len(), 1);
//! ```
//!
//! Grid space places sample `(col, row)` at `(col + 0.5, row + 0.5)`, so traced vertexes fall on
//! multiples of 0.5 within `[0, width] x [0, height]`. A [GridTransform](contour::GridTransform)
//! maps them to world coordinates.
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod contour;
pub mod core;
pub mod error;
pub mod grid;
pub mod isoring;
pub mod ring;

pub use static_aabb2d_index::AABB;

pub use crate::contour::{
    ContourBuilder, ContourGeometry, ContourMode, ContourOptions, ContourResult, GridTransform,
};
pub use crate::error::ContourError;
pub use crate::grid::Grid;
pub use crate::ring::{Polygon, Ring};
