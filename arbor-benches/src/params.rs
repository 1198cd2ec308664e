//! Benchmark parameter labels.

use std::fmt;

/// Parameters of a spanning tree benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of points, hence vertices of the complete graph.
    pub point_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.point_count)
    }
}

/// Parameters of a clustering benchmark run.
#[derive(Clone, Debug)]
pub struct ClusterBenchParams {
    /// Number of points.
    pub point_count: usize,
    /// Requested cluster count.
    pub clusters: usize,
}

impl fmt::Display for ClusterBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.point_count, self.clusters)
    }
}
