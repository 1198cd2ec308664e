//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::{Edge, Graph};

/// Shape of the generated graph and of its weights.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Distinct continuous weights; the minimum spanning tree is unique.
    #[weight(2)]
    Unique,
    /// Weights drawn from a pool of one to three integers, forcing ties.
    #[weight(3)]
    Tied,
    /// A random spanning tree plus a handful of extra edges.
    #[weight(2)]
    Sparse,
    /// Nearly complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// A generated graph together with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Materialises the fixture, keeping isolated vertices.
    pub(super) fn graph(&self) -> Graph {
        let mut graph = Graph::with_vertices(self.vertex_count);
        for edge in &self.edges {
            graph
                .insert_edge(edge.source(), edge.target(), edge.weight())
                .expect("generated edges are valid");
        }
        graph
    }

    /// Whether every weight differs from every other.
    pub(super) fn has_unique_weights(&self) -> bool {
        let mut weights: Vec<f64> = self.edges.iter().map(Edge::weight).collect();
        weights.sort_by(f64::total_cmp);
        weights.windows(2).all(|pair| pair[0] != pair[1])
    }
}

/// Fixture paired with a requested cluster count.
#[derive(Clone, Debug)]
pub(super) struct ClusteringFixture {
    pub graph: GraphFixture,
    pub k: usize,
}
