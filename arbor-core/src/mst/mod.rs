//! Minimum spanning tree construction and MST-based clustering.
//!
//! Two interchangeable algorithms are provided:
//!
//! - [`Kruskal`] sorts every edge by weight and merges components with a
//!   [`DisjointSet`]. Its clustering variant stops as soon as the requested
//!   number of components remains.
//! - [`Prim`] grows the tree from the first vertex using a binary heap. Its
//!   clustering variant computes the full tree and then drops the heaviest
//!   edges until the requested number of components appears.
//!
//! Both operate on a validated [`Graph`] whose vertex ids are the dense range
//! `0..n`. When the input is disconnected both return a minimum spanning
//! forest, and clustering treats the forest's components as clusters that
//! already exist.
//!
//! [`Algorithm`] selects between them at runtime.

mod disjoint_set;
mod kruskal;
mod prim;

use tracing::warn;

use crate::{
    error::{ArborError, Result},
    graph::{Edge, Graph, Weight},
    result::ClassAssignment,
};

pub use self::{disjoint_set::DisjointSet, kruskal::Kruskal, prim::Prim};

/// Ordered edge list produced by an MST computation.
///
/// For a connected graph on `n` vertices the tree has exactly `n - 1` edges.
/// Edge order is algorithm specific: Kruskal emits edges by ascending weight,
/// Prim in the order vertices were finalised.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub(crate) fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Returns the tree edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the tree, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when the tree has no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Sums the weights of all edges.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, Kruskal};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert_edge(0, 1, 1.0)?;
    /// graph.insert_edge(1, 2, 2.0)?;
    /// graph.insert_edge(0, 2, 5.0)?;
    /// assert_eq!(Kruskal::mst(&graph)?.total_weight(), 3.0);
    /// # Ok::<(), arbor_core::ArborError>(())
    /// ```
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(Edge::weight).sum()
    }
}

/// Selects the MST algorithm used for tree construction and clustering.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, Graph};
///
/// let mut graph = Graph::new();
/// graph.insert_edge(0, 1, 1.0)?;
/// graph.insert_edge(1, 2, 9.0)?;
/// for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
///     let clusters = algorithm.clustering(&graph, 2)?;
///     assert_eq!(clusters.cluster_count(), 2);
///     assert_eq!(clusters.cluster_of(0), clusters.cluster_of(1));
/// }
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Edge-sorting construction backed by union-find.
    #[default]
    Kruskal,
    /// Priority-queue construction grown from a single vertex.
    Prim,
}

impl Algorithm {
    /// Computes the minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// See [`Kruskal::mst`] and [`Prim::mst`].
    pub fn mst(self, graph: &Graph) -> Result<SpanningTree> {
        match self {
            Self::Kruskal => Kruskal::mst(graph),
            Self::Prim => Prim::mst(graph),
        }
    }

    /// Partitions the vertices of `graph` into `k` clusters.
    ///
    /// # Errors
    /// See [`Kruskal::clustering`] and [`Prim::clustering`].
    pub fn clustering(self, graph: &Graph, k: usize) -> Result<ClassAssignment> {
        match self {
            Self::Kruskal => Kruskal::clustering(graph, k),
            Self::Prim => Prim::clustering(graph, k),
        }
    }

    /// Returns a stable lowercase label for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

/// Validates the requested cluster count and clamps it to `vertex_count`.
fn requested_clusters(k: usize, vertex_count: usize) -> Result<usize> {
    if k == 0 {
        return Err(ArborError::InvalidClusterCount { got: k });
    }
    if k > vertex_count {
        warn!(
            requested = k,
            vertex_count, "cluster count exceeds vertex count; clamping"
        );
        return Ok(vertex_count);
    }
    Ok(k)
}

/// Stable ascending sort by weight; equal weights keep encounter order.
fn sort_by_weight(edges: &mut [Edge]) {
    edges.sort_by(|left, right| left.weight().total_cmp(&right.weight()));
}

fn warn_if_disconnected(assignment: &ClassAssignment, requested: usize) {
    if assignment.cluster_count() > requested {
        warn!(
            requested,
            components = assignment.cluster_count(),
            "graph is disconnected; returning its components as clusters"
        );
    }
}

#[cfg(test)]
mod property;
