//! Cluster assignments produced by MST clustering.

use thiserror::Error;

use crate::graph::Vertex;

/// Identifier of a cluster. Ids of a [`ClassAssignment`] are the dense range
/// `0..cluster_count`.
///
/// # Examples
/// ```
/// use arbor_core::ClusterId;
///
/// assert_eq!(ClusterId::new(4).get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(usize);

impl ClusterId {
    /// Creates a cluster identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// Error returned when cluster identifiers do not form `0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NonContiguousClusterIds {
    /// No vertex belongs to cluster `0`.
    #[error("cluster identifiers must include 0")]
    MissingZero,
    /// Some identifier below the largest one is unused.
    #[error("cluster identifier {missing} is unused but {max} is assigned")]
    Gap {
        /// Smallest unused identifier.
        missing: usize,
        /// Largest assigned identifier.
        max: usize,
    },
}

/// Maps every vertex `v` of a graph to the cluster at index `v`.
///
/// # Examples
/// ```
/// use arbor_core::{ClassAssignment, ClusterId};
///
/// let ids = [0, 1, 0].map(ClusterId::new).to_vec();
/// let assignment = ClassAssignment::try_from_assignments(ids)?;
/// assert_eq!(assignment.cluster_count(), 2);
/// assert_eq!(assignment.cluster_of(2), Some(ClusterId::new(0)));
/// assert_eq!(assignment.labels(), vec![0, 1, 0]);
/// # Ok::<(), arbor_core::NonContiguousClusterIds>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAssignment {
    assignments: Vec<ClusterId>,
    cluster_count: usize,
}

impl ClassAssignment {
    /// Validates and wraps per-vertex cluster ids.
    ///
    /// An empty vector is accepted and has no clusters.
    ///
    /// # Errors
    /// Returns [`NonContiguousClusterIds::MissingZero`] when cluster `0` is
    /// unused and [`NonContiguousClusterIds::Gap`] when an id below the
    /// maximum is skipped.
    pub fn try_from_assignments(
        assignments: Vec<ClusterId>,
    ) -> Result<Self, NonContiguousClusterIds> {
        let Some(max) = assignments.iter().map(|id| id.get()).max() else {
            return Ok(Self::from_parts(assignments, 0));
        };
        // A gap needs max >= len, so bounding the table by len is enough.
        if max >= assignments.len() {
            let missing = first_unused(&assignments, assignments.len());
            return Err(gap_or_missing_zero(missing, max));
        }

        let missing = first_unused(&assignments, max + 1);
        if missing <= max {
            return Err(gap_or_missing_zero(missing, max));
        }
        Ok(Self::from_parts(assignments, max + 1))
    }

    pub(crate) fn from_parts(assignments: Vec<ClusterId>, cluster_count: usize) -> Self {
        Self {
            assignments,
            cluster_count,
        }
    }

    /// Returns the cluster of every vertex, indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn assignments(&self) -> &[ClusterId] { &self.assignments }

    /// Returns the number of distinct clusters.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster_count(&self) -> usize { self.cluster_count }

    /// Returns the cluster of `vertex`, or `None` for an unknown vertex.
    #[must_use]
    pub fn cluster_of(&self, vertex: Vertex) -> Option<ClusterId> {
        self.assignments.get(vertex).copied()
    }

    /// Returns plain numeric labels, as consumed by quality metrics and
    /// writers.
    #[must_use]
    pub fn labels(&self) -> Vec<usize> {
        self.assignments.iter().map(|id| id.get()).collect()
    }

    /// Returns the number of assigned vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` when no vertex is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Smallest id in `0..bound` that no assignment uses, or `bound` if all are
/// used.
fn first_unused(assignments: &[ClusterId], bound: usize) -> usize {
    let mut used = vec![false; bound];
    for id in assignments {
        if let Some(slot) = used.get_mut(id.get()) {
            *slot = true;
        }
    }
    used.iter().position(|&seen| !seen).unwrap_or(bound)
}

fn gap_or_missing_zero(missing: usize, max: usize) -> NonContiguousClusterIds {
    if missing == 0 {
        NonContiguousClusterIds::MissingZero
    } else {
        NonContiguousClusterIds::Gap { missing, max }
    }
}
