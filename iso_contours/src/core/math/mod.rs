//! Core/common math functions and the 2D point/vector type shared by the tracer, the ring
//! predicates and the contour assembly.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};
