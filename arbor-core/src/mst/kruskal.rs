//! Kruskal's algorithm over a sorted edge list.

use tracing::{debug, instrument};

use super::{
    DisjointSet, SpanningTree, requested_clusters, sort_by_weight, warn_if_disconnected,
};
use crate::{
    clusters::find_clusters,
    error::Result,
    graph::{Edge, Graph, Vertex, edges_to_graph, graph_to_edges},
    result::ClassAssignment,
};

/// Kruskal's minimum spanning tree algorithm.
///
/// Edges are sorted by ascending weight with a stable sort, so equal weights
/// are considered in adjacency order. An edge joins the tree when its
/// endpoints lie in different [`DisjointSet`] groups.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Computes the minimum spanning tree of `graph`.
    ///
    /// Edges are returned in the order they were accepted, which is
    /// ascending weight.
    ///
    /// # Errors
    /// Returns [`crate::ArborError::EmptyGraph`] for a graph without vertices
    /// and [`crate::ArborError::NonDenseVertices`] when vertex ids are not
    /// `0..n`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, Kruskal};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert_edge(0, 1, 2.0)?;
    /// graph.insert_edge(1, 2, 1.0)?;
    /// graph.insert_edge(0, 2, 3.0)?;
    /// let tree = Kruskal::mst(&graph)?;
    /// assert_eq!(tree.edges(), &[Edge::new(1, 2, 1.0), Edge::new(0, 1, 2.0)]);
    /// # Ok::<(), arbor_core::ArborError>(())
    /// ```
    #[instrument(
        name = "kruskal.mst",
        level = "debug",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn mst(graph: &Graph) -> Result<SpanningTree> {
        graph.validate_dense()?;
        let forest = grow_until(graph, 1)?;
        Ok(SpanningTree::from_edges(forest))
    }

    /// Partitions the vertices of `graph` into `k` clusters.
    ///
    /// Runs the same loop as [`Kruskal::mst`] but stops as soon as `k` groups
    /// remain, then labels the connected components of the partial tree.
    /// When `k` is at least the vertex count every vertex becomes its own
    /// cluster without a single union.
    ///
    /// # Errors
    /// Returns the graph validation errors of [`Kruskal::mst`] and
    /// [`crate::ArborError::InvalidClusterCount`] when `k == 0`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, Kruskal};
    ///
    /// let mut graph = Graph::new();
    /// graph.insert_edge(0, 1, 1.0)?;
    /// graph.insert_edge(1, 2, 8.0)?;
    /// graph.insert_edge(2, 3, 1.5)?;
    /// let clusters = Kruskal::clustering(&graph, 2)?;
    /// assert_eq!(clusters.labels(), vec![0, 0, 1, 1]);
    /// # Ok::<(), arbor_core::ArborError>(())
    /// ```
    #[instrument(
        name = "kruskal.clustering",
        level = "debug",
        err,
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn clustering(graph: &Graph, k: usize) -> Result<ClassAssignment> {
        graph.validate_dense()?;
        let k = requested_clusters(k, graph.vertex_count())?;

        let forest = grow_until(graph, k)?;
        let vertices: Vec<Vertex> = graph.vertices().collect();
        let assignment = find_clusters(&edges_to_graph(&forest)?, &vertices)?;
        warn_if_disconnected(&assignment, k);
        Ok(assignment)
    }
}

/// Accepts edges in weight order until only `target_groups` groups remain or
/// the edges run out.
fn grow_until(graph: &Graph, target_groups: usize) -> Result<Vec<Edge>> {
    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut forest = Vec::with_capacity(graph.vertex_count().saturating_sub(target_groups));
    if sets.group_count() <= target_groups {
        return Ok(forest);
    }

    let mut edges = graph_to_edges(graph);
    sort_by_weight(&mut edges);

    for edge in edges {
        if !sets.union(edge.source(), edge.target())? {
            continue;
        }
        forest.push(edge);
        if sets.group_count() == target_groups {
            debug!(
                groups = target_groups,
                accepted = forest.len(),
                "reached requested group count"
            );
            break;
        }
    }

    Ok(forest)
}
