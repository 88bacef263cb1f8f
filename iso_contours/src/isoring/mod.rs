//! Marching squares tracing of isorings: the 16 entry case table, the stitcher that merges raster
//! ordered segments into closed rings, and the tracer that drives both over a grid.
mod case_table;
mod stitcher;
mod tracer;

pub use case_table::*;
pub use stitcher::*;
pub use tracer::*;
