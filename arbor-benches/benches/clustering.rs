//! k-way clustering by cutting spanning tree edges.
//!
//! Prim rebuilds its forest graph on every pass, so the gap to Kruskal widens
//! with `k`.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use arbor_benches::{
    error::BenchSetupError,
    params::ClusterBenchParams,
    source::{BlobConfig, generate_blobs},
};
use arbor_core::{Algorithm, points::complete_graph};

const SEED: u64 = 7;
const POINT_COUNT: usize = 300;
const CLUSTER_COUNTS: &[usize] = &[2, 8, 32];

fn clustering_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("clustering");
    group.sample_size(10);

    let data = generate_blobs(&BlobConfig {
        point_count: POINT_COUNT,
        blob_count: 8,
        separation: 80.0,
        spread: 4.0,
        seed: SEED,
    })?;
    let graph = complete_graph(&data.points)?;

    for &clusters in CLUSTER_COUNTS {
        let params = ClusterBenchParams {
            point_count: POINT_COUNT,
            clusters,
        };
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), &params),
                &clusters,
                |b, &k| {
                    b.iter(|| algorithm.clustering(&graph, k));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn clustering(c: &mut Criterion) {
    if let Err(err) = clustering_impl(c) {
        panic!("clustering benchmark setup failed: {err}");
    }
}

criterion_group!(benches, clustering);
criterion_main!(benches);
