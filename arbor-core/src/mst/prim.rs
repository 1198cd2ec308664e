//! Prim's algorithm driven by a binary min-heap.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use tracing::{instrument, warn};

use super::{SpanningTree, requested_clusters, sort_by_weight, warn_if_disconnected};
use crate::{
    clusters::find_clusters,
    error::{ArborError, Result},
    graph::{Edge, Graph, Vertex, Weight, edges_to_graph},
    result::ClassAssignment,
};

/// Prim's minimum spanning tree algorithm.
///
/// Grows the tree from the first vertex of the graph. Candidate edges wait in
/// a min-heap ordered by `(weight, vertex, predecessor)`; a candidate whose
/// vertex is already part of the tree is discarded when popped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prim;

/// Heap entry: reach `vertex` from `predecessor` at cost `weight`. The seed
/// entry of a traversal has no predecessor.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    weight: Weight,
    vertex: Vertex,
    predecessor: Option<Vertex>,
}

impl Candidate {
    const fn seed(vertex: Vertex) -> Self {
        Self {
            weight: 0.0,
            vertex,
            predecessor: None,
        }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .then_with(|| self.predecessor.cmp(&other.predecessor))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Prim {
    /// Computes the minimum spanning tree of `graph`.
    ///
    /// Edges are returned in the order their far endpoint was finalised,
    /// each as `(predecessor, vertex, weight)`. When the heap drains before
    /// every vertex is explored the graph is disconnected; the traversal then
    /// restarts from the next unexplored vertex and a spanning forest is
    /// returned.
    ///
    /// # Errors
    /// Returns [`ArborError::EmptyGraph`] for a graph without vertices and
    /// [`ArborError::NonDenseVertices`] when vertex ids are not `0..n`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, Prim};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert_edge(0, 1, 2.0)?;
    /// graph.insert_edge(1, 2, 1.0)?;
    /// graph.insert_edge(0, 2, 3.0)?;
    /// let tree = Prim::mst(&graph)?;
    /// assert_eq!(tree.edges(), &[Edge::new(0, 1, 2.0), Edge::new(1, 2, 1.0)]);
    /// # Ok::<(), arbor_core::ArborError>(())
    /// ```
    #[instrument(
        name = "prim.mst",
        level = "debug",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn mst(graph: &Graph) -> Result<SpanningTree> {
        graph.validate_dense()?;
        spanning_forest(graph).map(SpanningTree::from_edges)
    }

    /// Partitions the vertices of `graph` into `k` clusters.
    ///
    /// Computes the full tree, sorts its edges by ascending weight and
    /// removes the heaviest remaining edge until the tree falls apart into
    /// `k` components.
    ///
    /// # Errors
    /// Returns the graph validation errors of [`Prim::mst`] and
    /// [`ArborError::InvalidClusterCount`] when `k == 0`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, Prim};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert_edge(0, 1, 1.0)?;
    /// graph.insert_edge(1, 2, 8.0)?;
    /// graph.insert_edge(2, 3, 1.5)?;
    /// let clusters = Prim::clustering(&graph, 3)?;
    /// assert_eq!(clusters.labels(), vec![0, 0, 1, 2]);
    /// # Ok::<(), arbor_core::ArborError>(())
    /// ```
    #[instrument(
        name = "prim.clustering",
        level = "debug",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn clustering(graph: &Graph, k: usize) -> Result<ClassAssignment> {
        graph.validate_dense()?;
        let k = requested_clusters(k, graph.vertex_count())?;

        let mut edges = spanning_forest(graph)?;
        sort_by_weight(&mut edges);
        let vertices: Vec<Vertex> = graph.vertices().collect();

        loop {
            let assignment = find_clusters(&edges_to_graph(&edges)?, &vertices)?;
            if assignment.cluster_count() >= k || edges.pop().is_none() {
                warn_if_disconnected(&assignment, k);
                return Ok(assignment);
            }
        }
    }
}

fn spanning_forest(graph: &Graph) -> Result<Vec<Edge>> {
    let vertex_count = graph.vertex_count();
    let mut explored = vec![false; vertex_count];
    let mut tree = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut frontier = BinaryHeap::new();

    for start in graph.vertices() {
        if is_explored(&explored, start)? {
            continue;
        }
        if start != 0 {
            warn!(start, "graph is disconnected; growing another tree");
        }
        frontier.push(Reverse(Candidate::seed(start)));

        while let Some(Reverse(candidate)) = frontier.pop() {
            if is_explored(&explored, candidate.vertex)? {
                continue;
            }
            mark_explored(&mut explored, candidate.vertex)?;
            if let Some(predecessor) = candidate.predecessor {
                tree.push(Edge::new(predecessor, candidate.vertex, candidate.weight));
            }
            for (neighbour, weight) in graph.neighbours(candidate.vertex) {
                if !is_explored(&explored, neighbour)? {
                    frontier.push(Reverse(Candidate {
                        weight,
                        vertex: neighbour,
                        predecessor: Some(candidate.vertex),
                    }));
                }
            }
        }
    }

    Ok(tree)
}

fn is_explored(explored: &[bool], vertex: Vertex) -> Result<bool> {
    explored
        .get(vertex)
        .copied()
        .ok_or(ArborError::VertexOutOfRange {
            vertex,
            vertex_count: explored.len(),
        })
}

fn mark_explored(explored: &mut [bool], vertex: Vertex) -> Result<()> {
    let vertex_count = explored.len();
    let slot = explored.get_mut(vertex).ok_or(ArborError::VertexOutOfRange {
        vertex,
        vertex_count,
    })?;
    *slot = true;
    Ok(())
}
