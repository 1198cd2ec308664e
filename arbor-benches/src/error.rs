//! Benchmark setup error type.

use arbor_core::ArborError;

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building the graph or running the algorithm failed.
    #[error("graph preparation failed: {0}")]
    Arbor(#[from] ArborError),
}
