//! Readers for planar point files and class-label files.
//!
//! A point file holds one `x y` pair per line, separated by whitespace. A
//! class file holds one integer label per line, in the same order as the
//! points. Blank lines are skipped in both and errors name the 1-based line.

mod errors;
mod labels;
mod point_set;

pub use errors::PointsProviderError;
pub use labels::{read_class_labels, read_class_labels_from_path};
pub use point_set::PointSet;
