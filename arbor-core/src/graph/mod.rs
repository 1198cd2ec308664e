//! Weighted undirected graph in adjacency-map form.
//!
//! The graph stores every undirected edge in both directions. Vertices and
//! neighbours are kept in ordered maps so traversal order is ascending vertex
//! id, which the MST algorithms rely on for deterministic tie-breaking.

mod convert;

use std::collections::{BTreeMap, btree_map};

use crate::error::{ArborError, Result};

pub use self::convert::{edges_to_graph, graph_to_edges};

/// Vertex identifier. Algorithms use ids as dense indices `0..n`.
pub type Vertex = usize;

/// Edge weight: a finite, non-negative real number.
pub type Weight = f64;

/// A single weighted edge.
///
/// Edges describe undirected connections; `source` and `target` carry no
/// canonical ordering.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let edge = Edge::new(3, 1, 2.5);
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (3, 1, 2.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: Vertex,
    target: Vertex,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: Vertex, target: Vertex, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint the edge was recorded from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> Vertex { self.source }

    /// Returns the endpoint the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> Vertex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((source, target, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Weighted undirected graph stored as `vertex -> (neighbour -> weight)`.
///
/// Construction through [`Graph::insert_edge`] always records both
/// directions, so `weight(a, b) == weight(b, a)` holds for every stored edge.
/// Externally supplied maps go through [`Graph::try_from_adjacency`], which
/// verifies the same invariant.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new();
/// graph.insert_edge(0, 1, 4.0)?;
/// graph.insert_edge(1, 2, 1.5)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(2, 1), Some(1.5));
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeMap<Vertex, Weight>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the isolated vertices `0..vertex_count`.
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|v| (v, BTreeMap::new())).collect(),
        }
    }

    /// Validates and wraps an adjacency map.
    ///
    /// # Errors
    /// Returns [`ArborError::SelfLoop`] for an edge `v -> v`,
    /// [`ArborError::InvalidWeight`] for a negative or non-finite weight and
    /// [`ArborError::AsymmetricEdge`] when `a -> b` exists without a matching
    /// `b -> a` of the same weight.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use arbor_core::{ArborError, Graph};
    ///
    /// let mut one_way = BTreeMap::new();
    /// one_way.insert(0, BTreeMap::from([(1, 2.0)]));
    /// one_way.insert(1, BTreeMap::new());
    /// assert!(matches!(
    ///     Graph::try_from_adjacency(one_way),
    ///     Err(ArborError::AsymmetricEdge { left: 0, right: 1 })
    /// ));
    /// ```
    pub fn try_from_adjacency(
        adjacency: BTreeMap<Vertex, BTreeMap<Vertex, Weight>>,
    ) -> Result<Self> {
        for (&vertex, neighbours) in &adjacency {
            for (&neighbour, &weight) in neighbours {
                check_edge(vertex, neighbour, weight)?;
                let reverse = adjacency
                    .get(&neighbour)
                    .and_then(|back| back.get(&vertex))
                    .copied();
                if reverse != Some(weight) {
                    return Err(ArborError::AsymmetricEdge {
                        left: vertex,
                        right: neighbour,
                    });
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Adds `vertex` without edges. Existing vertices are left untouched.
    pub fn insert_vertex(&mut self, vertex: Vertex) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds the undirected edge `{a, b}` in both directions, replacing any
    /// previous weight.
    ///
    /// # Errors
    /// Returns [`ArborError::SelfLoop`] when `a == b` and
    /// [`ArborError::InvalidWeight`] for negative or non-finite weights.
    pub fn insert_edge(&mut self, a: Vertex, b: Vertex, weight: Weight) -> Result<()> {
        check_edge(a, b, weight)?;
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates vertices in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates `(neighbour, weight)` pairs of `vertex` in ascending
    /// neighbour order. Unknown vertices have no neighbours.
    pub fn neighbours(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(&n, &w)| (n, w)))
    }

    /// Returns the weight of edge `{a, b}`, if present.
    #[must_use]
    pub fn weight(&self, a: Vertex, b: Vertex) -> Option<Weight> {
        self.adjacency.get(&a).and_then(|n| n.get(&b)).copied()
    }

    /// Checks that vertex ids are exactly `0..vertex_count`.
    ///
    /// # Errors
    /// Returns [`ArborError::EmptyGraph`] for a graph without vertices and
    /// [`ArborError::NonDenseVertices`] naming the first id outside the range.
    pub fn validate_dense(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ArborError::EmptyGraph);
        }
        let vertex_count = self.vertex_count();
        // Keys are sorted and distinct: dense iff the i-th key equals i.
        match self.vertices().enumerate().find(|&(idx, v)| idx != v) {
            Some((_, vertex)) => Err(ArborError::NonDenseVertices {
                vertex,
                vertex_count,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn adjacency(&self) -> btree_map::Iter<'_, Vertex, BTreeMap<Vertex, Weight>> {
        self.adjacency.iter()
    }
}

fn check_edge(a: Vertex, b: Vertex, weight: Weight) -> Result<()> {
    if a == b {
        return Err(ArborError::SelfLoop { vertex: a });
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(ArborError::InvalidWeight { left: a, right: b });
    }
    Ok(())
}
