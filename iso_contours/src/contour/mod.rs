//! Multi-threshold contouring: the [ContourBuilder] entry point plus the assembly of traced rings
//! into polygons, linear smoothing and the grid to world transform.
mod assembler;
mod builder;
mod smooth;
mod types;

pub use assembler::*;
pub use builder::*;
pub use smooth::*;
pub use types::*;
