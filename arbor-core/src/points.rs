//! Planar points and the complete Euclidean graph over them.
//!
//! The CLI clusters point clouds by building a graph with one vertex per
//! point and an edge between every pair, weighted by straight-line distance.
//! Rows of the distance matrix are computed on the rayon pool when the
//! `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

use crate::{
    error::{ArborError, Result},
    graph::{Graph, Vertex, Weight},
};

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Straight-line distance between two points.
///
/// # Examples
/// ```
/// use arbor_core::points::{Point, euclidean_distance};
///
/// let d = euclidean_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
#[must_use]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Builds the complete graph over `points`, vertex `i` standing for
/// `points[i]`.
///
/// Coincident points are joined by zero-weight edges. An empty slice yields an
/// empty graph and a single point yields one isolated vertex.
///
/// # Errors
/// Returns [`ArborError::NonFiniteCoordinate`] for the first point with a NaN
/// or infinite coordinate and [`ArborError::InvalidWeight`] when a distance
/// overflows to infinity.
///
/// # Examples
/// ```
/// use arbor_core::points::{Point, complete_graph};
///
/// let graph = complete_graph(&[Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(1.0, 0.0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.weight(0, 1), Some(2.0));
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[instrument(name = "points.complete_graph", level = "debug", err, skip_all, fields(points = points.len()))]
pub fn complete_graph(points: &[Point]) -> Result<Graph> {
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(ArborError::NonFiniteCoordinate { index });
    }

    let mut graph = Graph::with_vertices(points.len());
    for (vertex, row) in distance_rows(points) {
        for (neighbour, weight) in row {
            graph.insert_edge(vertex, neighbour, weight)?;
        }
    }
    Ok(graph)
}

type Row = (Vertex, Vec<(Vertex, Weight)>);

/// Upper-triangle rows: row `i` holds the distances to every `j > i`.
fn row(points: &[Point], vertex: Vertex) -> Row {
    let origin = points[vertex];
    let distances = points
        .iter()
        .enumerate()
        .skip(vertex + 1)
        .map(|(neighbour, &point)| (neighbour, euclidean_distance(origin, point)))
        .collect();
    (vertex, distances)
}

#[cfg(feature = "parallel")]
fn distance_rows(points: &[Point]) -> Vec<Row> {
    (0..points.len())
        .into_par_iter()
        .map(|vertex| row(points, vertex))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn distance_rows(points: &[Point]) -> Vec<Row> {
    (0..points.len()).map(|vertex| row(points, vertex)).collect()
}
