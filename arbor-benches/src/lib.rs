//! Benchmark support crate for arbor.
//!
//! Generates reproducible planar point clouds and the parameter labels used by
//! the Criterion benchmarks of spanning tree construction and clustering.

pub mod error;
pub mod params;
pub mod source;
