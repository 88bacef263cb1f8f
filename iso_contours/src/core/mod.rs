//! Core module has common/shared math, traits, and storage modules.
pub mod arena;
pub mod math;
pub mod traits;
