//! Graph generators for MST property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing case can
//! be replayed from its distribution and seed alone. Generated edges join
//! distinct vertices and each unordered pair appears at most once.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{ClusteringFixture, GraphFixture, WeightDistribution};

const MIN_VERTICES: usize = 1;
const MAX_VERTICES: usize = 48;
const DENSE_MAX_VERTICES: usize = 24;

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Pairs a graph with `k` in `1..=n + 2`, so clamping is exercised too.
pub(super) fn clustering_fixture_strategy() -> impl Strategy<Value = ClusteringFixture> {
    graph_fixture_strategy().prop_flat_map(|graph| {
        let upper = graph.vertex_count + 2;
        (Just(graph), 1..=upper).prop_map(|(graph, k)| ClusteringFixture { graph, k })
    })
}

pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let p = rng.gen_range(0.2..=0.6);
            (n, random_pairs(rng, 0..n, p, |r| r.gen_range(0.0..100.0)))
        }
        WeightDistribution::Tied => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let p = rng.gen_range(0.3..=0.7);
            let edges = random_pairs(rng, 0..n, p, |r| pool[r.gen_range(0..pool.len())]);
            (n, edges)
        }
        WeightDistribution::Sparse => {
            let n = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let mut edges = random_tree(rng, 0..n);
            add_extra_edges(rng, n, &mut edges, n / 2);
            (n, edges)
        }
        WeightDistribution::Dense => {
            let n = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let p = rng.gen_range(0.7..=0.95);
            (n, random_pairs(rng, 0..n, p, |r| r.gen_range(0.0..10.0)))
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    GraphFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    vertices: std::ops::Range<usize>,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for a in vertices.clone() {
        for b in (a + 1)..vertices.end {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(Edge::new(a, b, w));
            }
        }
    }
    edges
}

/// Attaches every vertex after the first to a random earlier one.
fn random_tree(rng: &mut SmallRng, vertices: std::ops::Range<usize>) -> Vec<Edge> {
    let start = vertices.start;
    vertices
        .skip(1)
        .map(|v| Edge::new(rng.gen_range(start..v), v, rng.gen_range(0.0..50.0)))
        .collect()
}

fn add_extra_edges(rng: &mut SmallRng, n: usize, edges: &mut Vec<Edge>, extra: usize) {
    if n < 2 {
        return;
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let taken = edges.iter().any(|e| {
            (e.source(), e.target()) == (a, b) || (e.source(), e.target()) == (b, a)
        });
        if a != b && !taken {
            edges.push(Edge::new(a, b, rng.gen_range(0.0..50.0)));
        }
    }
}

/// Splits `0..n` into two to four contiguous blocks, each a random tree.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let blocks = rng.gen_range(2..=4);
    let mut edges = Vec::new();
    let mut start = 0;
    for _ in 0..blocks {
        let len = rng.gen_range(1..=12);
        edges.extend(random_tree(rng, start..start + len));
        start += len;
    }
    (start, edges)
}
