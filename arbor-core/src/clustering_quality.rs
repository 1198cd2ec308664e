//! Agreement scores between a clustering and reference class labels.
//!
//! Both scores are invariant to relabelling: they compare which items share
//! a cluster, never the cluster ids themselves.
//!
//! - Adjusted Rand Index (ARI) counts agreeing item pairs, corrected for
//!   chance. `1.0` is a perfect match; random labellings sit near `0.0`.
//! - Normalized Mutual Information (NMI) is the mutual information of the
//!   two labellings divided by the geometric mean of their entropies, in
//!   `[0.0, 1.0]`.

use std::collections::BTreeMap;

use thiserror::Error;

/// ARI and NMI of one labelling against another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusteringQualityScore {
    /// Adjusted Rand Index in `[-1.0, 1.0]`.
    pub ari: f64,
    /// Normalized Mutual Information in `[0.0, 1.0]`.
    pub nmi: f64,
}

/// Errors raised while scoring labellings.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ClusteringQualityError {
    /// Reference and predicted labels cover a different number of items.
    #[error("label length mismatch: reference={reference}, predicted={predicted}")]
    LabelLengthMismatch {
        /// Number of reference labels.
        reference: usize,
        /// Number of predicted labels.
        predicted: usize,
    },
}

/// Joint and marginal label counts of two labellings.
struct Contingency {
    items: usize,
    reference: BTreeMap<usize, usize>,
    predicted: BTreeMap<usize, usize>,
    joint: BTreeMap<(usize, usize), usize>,
}

impl Contingency {
    fn build(reference: &[usize], predicted: &[usize]) -> Result<Self, ClusteringQualityError> {
        if reference.len() != predicted.len() {
            return Err(ClusteringQualityError::LabelLengthMismatch {
                reference: reference.len(),
                predicted: predicted.len(),
            });
        }
        let mut table = Self {
            items: reference.len(),
            reference: BTreeMap::new(),
            predicted: BTreeMap::new(),
            joint: BTreeMap::new(),
        };
        for (&left, &right) in reference.iter().zip(predicted) {
            *table.reference.entry(left).or_default() += 1;
            *table.predicted.entry(right).or_default() += 1;
            *table.joint.entry((left, right)).or_default() += 1;
        }
        Ok(table)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "ARI is defined over real-valued pair counts."
    )]
    fn adjusted_rand_index(&self) -> f64 {
        let total = pairs(self.items);
        if total == 0.0 {
            return 1.0;
        }
        let agreeing: f64 = self.joint.values().copied().map(pairs).sum();
        let reference: f64 = self.reference.values().copied().map(pairs).sum();
        let predicted: f64 = self.predicted.values().copied().map(pairs).sum();

        let expected = reference * predicted / total;
        let ceiling = (reference + predicted) / 2.0;
        if ceiling == expected {
            // Both labellings are trivial (all together or all apart).
            return 1.0;
        }
        (agreeing - expected) / (ceiling - expected)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "NMI is defined over real-valued entropies."
    )]
    fn normalized_mutual_information(&self) -> f64 {
        if self.items == 0 {
            return 1.0;
        }
        let reference = entropy(self.reference.values().copied(), self.items);
        let predicted = entropy(self.predicted.values().copied(), self.items);
        match (reference == 0.0, predicted == 0.0) {
            (true, true) => 1.0,
            (true, false) | (false, true) => 0.0,
            (false, false) => {
                let joint = entropy(self.joint.values().copied(), self.items);
                let mutual = (reference + predicted - joint).max(0.0);
                (mutual / (reference * predicted).sqrt()).min(1.0)
            }
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "pair counts feed floating-point ratios."
)]
fn pairs(count: usize) -> f64 {
    let count = count as f64;
    count * (count - 1.0) / 2.0
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "entropy is a real-valued sum."
)]
fn entropy(counts: impl Iterator<Item = usize>, items: usize) -> f64 {
    let items = items as f64;
    counts
        .map(|count| {
            let p = count as f64 / items;
            -p * p.ln()
        })
        .sum()
}

/// Adjusted Rand Index of `predicted` against `reference`.
///
/// # Errors
/// Returns [`ClusteringQualityError::LabelLengthMismatch`] when the slices
/// differ in length.
///
/// # Examples
/// ```
/// use arbor_core::clustering_quality::adjusted_rand_index;
///
/// let ari = adjusted_rand_index(&[0, 0, 1, 1], &[5, 5, 2, 2])?;
/// assert_eq!(ari, 1.0);
/// # Ok::<(), arbor_core::clustering_quality::ClusteringQualityError>(())
/// ```
pub fn adjusted_rand_index(
    reference: &[usize],
    predicted: &[usize],
) -> Result<f64, ClusteringQualityError> {
    Contingency::build(reference, predicted).map(|table| table.adjusted_rand_index())
}

/// Normalized Mutual Information of `predicted` against `reference`.
///
/// # Errors
/// Returns [`ClusteringQualityError::LabelLengthMismatch`] when the slices
/// differ in length.
pub fn normalized_mutual_information(
    reference: &[usize],
    predicted: &[usize],
) -> Result<f64, ClusteringQualityError> {
    Contingency::build(reference, predicted).map(|table| table.normalized_mutual_information())
}

/// Computes ARI and NMI from a single contingency table.
///
/// # Errors
/// Returns [`ClusteringQualityError::LabelLengthMismatch`] when the slices
/// differ in length.
pub fn clustering_quality_score(
    reference: &[usize],
    predicted: &[usize],
) -> Result<ClusteringQualityScore, ClusteringQualityError> {
    let table = Contingency::build(reference, predicted)?;
    Ok(ClusteringQualityScore {
        ari: table.adjusted_rand_index(),
        nmi: table.normalized_mutual_information(),
    })
}
