//! Adapters between the adjacency-map and edge-list representations.

use super::{Edge, Graph};
use crate::error::Result;

/// Flattens `graph` into an edge list.
///
/// Every undirected edge appears twice, once from each endpoint, in
/// adjacency iteration order (ascending source, then ascending target).
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, graph_to_edges};
///
/// let mut graph = Graph::new();
/// graph.insert_edge(0, 1, 3.0)?;
/// assert_eq!(
///     graph_to_edges(&graph),
///     vec![Edge::new(0, 1, 3.0), Edge::new(1, 0, 3.0)]
/// );
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[must_use]
pub fn graph_to_edges(graph: &Graph) -> Vec<Edge> {
    graph
        .adjacency()
        .flat_map(|(&source, neighbours)| {
            neighbours
                .iter()
                .map(move |(&target, &weight)| Edge::new(source, target, weight))
        })
        .collect()
}

/// Builds a graph containing exactly the endpoints and edges of `edges`.
///
/// Each edge is stored in both directions; a repeated pair keeps the weight
/// of its last occurrence. Vertices that appear in no edge are absent.
///
/// # Errors
/// Returns [`crate::ArborError::SelfLoop`] or
/// [`crate::ArborError::InvalidWeight`] when an edge is malformed.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, edges_to_graph};
///
/// let graph = edges_to_graph(&[Edge::new(4, 2, 1.0)])?;
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![2, 4]);
/// assert_eq!(graph.weight(2, 4), Some(1.0));
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
pub fn edges_to_graph(edges: &[Edge]) -> Result<Graph> {
    let mut graph = Graph::new();
    for edge in edges {
        graph.insert_edge(edge.source(), edge.target(), edge.weight())?;
    }
    Ok(graph)
}
