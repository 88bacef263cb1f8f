//! This module has the closed ring and polygon types produced by contouring along with the pure
//! geometric predicates (signed area, point in ring, ring in ring) used to assemble them.
mod polygon;
mod predicates;
#[allow(clippy::module_inception)]
mod ring;

pub use polygon::*;
pub use predicates::*;
pub use ring::*;
