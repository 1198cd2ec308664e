//! Matrix-based reference implementation for MST properties.
//!
//! Runs the textbook `O(n^2)` Prim over an adjacency matrix, restarting at
//! the lowest unreached vertex whenever the frontier empties. It shares no
//! code with the heap or union-find implementations under test.

use crate::Edge;
use crate::test_utils::partition;

/// Minimum spanning forest computed by the oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    pub edges: Vec<Edge>,
    pub components: usize,
}

impl OracleForest {
    pub(super) fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

pub(super) fn matrix_prim(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut matrix = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges {
        matrix[edge.source()][edge.target()] = Some(edge.weight());
        matrix[edge.target()][edge.source()] = Some(edge.weight());
    }

    let mut in_tree = vec![false; vertex_count];
    // Cheapest known connection into the tree: (weight, tree vertex).
    let mut best: Vec<Option<(f64, usize)>> = vec![None; vertex_count];
    let mut forest = Vec::new();
    let mut components = 0;

    for _ in 0..vertex_count {
        let next = (0..vertex_count)
            .filter(|&v| !in_tree[v])
            .min_by(|&a, &b| match (best[a], best[b]) {
                (Some((wa, _)), Some((wb, _))) => wa.total_cmp(&wb),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.cmp(&b),
            })
            .expect("an unreached vertex remains");

        match best[next] {
            Some((weight, from)) => forest.push(Edge::new(from, next, weight)),
            None => components += 1,
        }
        in_tree[next] = true;

        for v in 0..vertex_count {
            if let Some(weight) = matrix[next][v]
                && !in_tree[v]
                && best[v].is_none_or(|(current, _)| weight < current)
            {
                best[v] = Some((weight, next));
            }
        }
    }

    OracleForest {
        edges: forest,
        components,
    }
}

/// Single-linkage partition: the oracle forest minus its heaviest edges
/// until `max(k, components)` groups remain. Unique only for distinct
/// weights.
pub(super) fn single_linkage_partition(
    vertex_count: usize,
    edges: &[Edge],
    k: usize,
) -> Vec<Vec<usize>> {
    let forest = matrix_prim(vertex_count, edges);
    let mut kept = forest.edges;
    kept.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    let groups = k.min(vertex_count).max(forest.components);
    kept.truncate(vertex_count - groups);

    let mut labels: Vec<usize> = (0..vertex_count).collect();
    // Relabel until stable; fine at test sizes.
    let mut changed = true;
    while changed {
        changed = false;
        for edge in &kept {
            let low = labels[edge.source()].min(labels[edge.target()]);
            for end in [edge.source(), edge.target()] {
                if labels[end] != low {
                    labels[end] = low;
                    changed = true;
                }
            }
        }
    }
    partition(&labels)
}
