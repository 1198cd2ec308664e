//! Structural properties of spanning forests and clusterings.
//!
//! - The forest is acyclic and uses only edges of the input graph.
//! - It has `n - c` edges for `c` connected components.
//! - Every algorithm's forest weighs the same as the oracle's.
//! - Clustering yields exactly `max(min(k, n), c)` clusters, with ids
//!   contiguous from `0` in first-appearance order.
//! - Every graph edge joining two clusters is at least as heavy as every
//!   edge Kruskal used inside a cluster.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::forest_components;
use crate::{Algorithm, ClassAssignment, Kruskal, SpanningTree};

use super::oracle::matrix_prim;
use super::types::{ClusteringFixture, GraphFixture};

const WEIGHT_TOLERANCE: f64 = 1e-9;

pub(super) fn run_forest_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = matrix_prim(fixture.vertex_count, &fixture.edges);

    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let tree = algorithm.mst(&graph).map_err(|err| {
            TestCaseError::fail(format!(
                "{} failed: {err} (distribution={:?}, vertices={})",
                algorithm.as_str(),
                fixture.distribution,
                fixture.vertex_count,
            ))
        })?;
        validate_forest(fixture, &tree, oracle.components, algorithm)?;
        let (got, expected) = (tree.total_weight(), oracle.total_weight());
        if (got - expected).abs() > WEIGHT_TOLERANCE * expected.max(1.0) {
            return Err(TestCaseError::fail(format!(
                "{} weight {got} differs from oracle weight {expected} ({:?})",
                algorithm.as_str(),
                fixture.distribution,
            )));
        }
    }
    Ok(())
}

fn validate_forest(
    fixture: &GraphFixture,
    tree: &SpanningTree,
    expected_components: usize,
    algorithm: Algorithm,
) -> TestCaseResult {
    let graph = fixture.graph();
    for edge in tree.edges() {
        if graph.weight(edge.source(), edge.target()) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "{} returned {edge:?}, which is not a graph edge",
                algorithm.as_str()
            )));
        }
    }
    let components = forest_components(fixture.vertex_count, tree.edges()).ok_or_else(|| {
        TestCaseError::fail(format!("{} returned a cycle", algorithm.as_str()))
    })?;
    if components != expected_components {
        return Err(TestCaseError::fail(format!(
            "{} forest has {components} components, graph has {expected_components}",
            algorithm.as_str()
        )));
    }
    Ok(())
}

pub(super) fn run_clustering_property(fixture: &ClusteringFixture) -> TestCaseResult {
    let graph = fixture.graph.graph();
    let n = fixture.graph.vertex_count;
    let components = matrix_prim(n, &fixture.graph.edges).components;
    let expected = fixture.k.min(n).max(components);

    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let clusters = algorithm
            .clustering(&graph, fixture.k)
            .map_err(|err| TestCaseError::fail(format!("{}: {err}", algorithm.as_str())))?;
        validate_labels(&clusters, n, expected, algorithm)?;
    }

    validate_spacing(fixture)
}

fn validate_labels(
    clusters: &ClassAssignment,
    n: usize,
    expected: usize,
    algorithm: Algorithm,
) -> TestCaseResult {
    let name = algorithm.as_str();
    if clusters.len() != n || clusters.cluster_count() != expected {
        return Err(TestCaseError::fail(format!(
            "{name}: {} labels in {} clusters, expected {n} in {expected}",
            clusters.len(),
            clusters.cluster_count(),
        )));
    }
    let mut next = 0;
    for label in clusters.labels() {
        if label > next {
            return Err(TestCaseError::fail(format!(
                "{name}: label {label} appears before {next}"
            )));
        }
        if label == next {
            next += 1;
        }
    }
    Ok(())
}

fn validate_spacing(fixture: &ClusteringFixture) -> TestCaseResult {
    let graph = fixture.graph.graph();
    let clusters = Kruskal::clustering(&graph, fixture.k)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let forest = Kruskal::mst(&graph).map_err(|err| TestCaseError::fail(err.to_string()))?;

    let heaviest_inside = forest
        .edges()
        .iter()
        .filter(|edge| clusters.cluster_of(edge.source()) == clusters.cluster_of(edge.target()))
        .map(|edge| edge.weight())
        .fold(f64::NEG_INFINITY, f64::max);
    let lightest_between = fixture
        .graph
        .edges
        .iter()
        .filter(|edge| clusters.cluster_of(edge.source()) != clusters.cluster_of(edge.target()))
        .map(|edge| edge.weight())
        .fold(f64::INFINITY, f64::min);

    if lightest_between < heaviest_inside {
        return Err(TestCaseError::fail(format!(
            "edge of weight {lightest_between} crosses clusters joined at {heaviest_inside}"
        )));
    }
    Ok(())
}
