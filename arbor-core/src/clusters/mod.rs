//! Connected-component labelling of a spanning forest.

use tracing::instrument;

use crate::{
    error::{ArborError, Result},
    graph::{Graph, Vertex},
    result::{ClassAssignment, ClusterId},
};

/// Labels the connected components of `forest` over `vertices`.
///
/// `vertices` lists every vertex of the input graph, including those the
/// forest does not touch; untouched vertices become singleton clusters.
/// Vertices are visited front to back and each one not yet labelled opens a
/// new cluster, so the first vertex always lands in cluster `0` and ids
/// follow first appearance.
///
/// # Errors
/// Returns [`ArborError::VertexOutOfRange`] when a vertex of `vertices` or of
/// `forest` is not below `vertices.len()`, and
/// [`ArborError::NonDenseVertices`] when `vertices` is not a permutation of
/// `0..vertices.len()`.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, find_clusters};
///
/// let mut forest = Graph::new();
/// forest.insert_edge(0, 2, 1.0)?;
/// let clusters = find_clusters(&forest, &[0, 1, 2, 3])?;
/// assert_eq!(clusters.labels(), vec![0, 1, 0, 2]);
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[instrument(
    name = "clusters.find",
    level = "trace",
    err,
    skip_all,
    fields(vertices = vertices.len(), edges = forest.edge_count()),
)]
pub fn find_clusters(forest: &Graph, vertices: &[Vertex]) -> Result<ClassAssignment> {
    let vertex_count = vertices.len();
    let mut labels: Vec<Option<ClusterId>> = vec![None; vertex_count];
    let mut next = 0;
    let mut stack = Vec::new();

    for &start in vertices {
        if slot(&mut labels, start)?.is_some() {
            continue;
        }
        let cluster = ClusterId::new(next);
        next += 1;

        stack.push(start);
        while let Some(vertex) = stack.pop() {
            let label = slot(&mut labels, vertex)?;
            if label.is_some() {
                continue;
            }
            *label = Some(cluster);
            stack.extend(forest.neighbours(vertex).map(|(neighbour, _)| neighbour));
        }
    }

    let assignments = labels
        .into_iter()
        .enumerate()
        .map(|(vertex, label)| {
            label.ok_or(ArborError::NonDenseVertices {
                vertex,
                vertex_count,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ClassAssignment::from_parts(assignments, next))
}

fn slot(labels: &mut [Option<ClusterId>], vertex: Vertex) -> Result<&mut Option<ClusterId>> {
    let vertex_count = labels.len();
    labels.get_mut(vertex).ok_or(ArborError::VertexOutOfRange {
        vertex,
        vertex_count,
    })
}
