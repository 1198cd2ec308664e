//! Kruskal and Prim must agree with each other and with the oracle.
//!
//! Forest weight always matches. With distinct weights the k-clustering is
//! unique, so both algorithms must produce the oracle's partition.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::partition;
use crate::{Kruskal, Prim};

use super::oracle::single_linkage_partition;
use super::types::ClusteringFixture;

pub(super) fn run_partition_equivalence_property(fixture: &ClusteringFixture) -> TestCaseResult {
    if !fixture.graph.has_unique_weights() {
        return Ok(());
    }
    let graph = fixture.graph.graph();
    let expected =
        single_linkage_partition(fixture.graph.vertex_count, &fixture.graph.edges, fixture.k);

    let kruskal = Kruskal::clustering(&graph, fixture.k)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let prim =
        Prim::clustering(&graph, fixture.k).map_err(|err| TestCaseError::fail(err.to_string()))?;

    for (name, clusters) in [("kruskal", &kruskal), ("prim", &prim)] {
        let got = partition(&clusters.labels());
        if got != expected {
            return Err(TestCaseError::fail(format!(
                "{name} partition {got:?} differs from oracle {expected:?} (k={}, {:?})",
                fixture.k, fixture.graph.distribution,
            )));
        }
    }
    if kruskal != prim {
        return Err(TestCaseError::fail(
            "same partition must yield the same labels",
        ));
    }
    Ok(())
}
