//! Arbor core library.
//!
//! Computes minimum spanning trees over weighted undirected graphs with
//! Kruskal's and Prim's algorithms and derives a k-way clustering of the
//! vertices by pruning the tree down to `k` connected components.
//!
//! # Determinism
//!
//! [`Graph`] iterates vertices and neighbours in ascending id order. Kruskal
//! sorts edges stably by weight, so ties are resolved by that encounter
//! order; Prim breaks heap ties by `(weight, vertex, predecessor)`. Given the
//! same graph both algorithms always return the same edge list.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod clustering_quality;
mod clusters;
mod error;
mod graph;
mod mst;
pub mod points;
mod result;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    clusters::find_clusters,
    error::{ArborError, ArborErrorCode, ErrorKind, Result},
    graph::{Edge, Graph, Vertex, Weight, edges_to_graph, graph_to_edges},
    mst::{Algorithm, DisjointSet, Kruskal, Prim, SpanningTree},
    result::{ClassAssignment, ClusterId, NonContiguousClusterIds},
};
