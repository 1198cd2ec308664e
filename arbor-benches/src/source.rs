//! Seeded Gaussian-like blobs of planar points.

use arbor_core::points::Point;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::f64::consts::PI;

/// Shape of a synthetic blob dataset.
#[derive(Clone, Debug)]
pub struct BlobConfig {
    /// Total number of points.
    pub point_count: usize,
    /// Number of blobs; points are dealt to blobs round-robin.
    pub blob_count: usize,
    /// Distance of every blob centre from the origin.
    pub separation: f64,
    /// Half-width of the square each blob's points are drawn from.
    pub spread: f64,
    /// RNG seed.
    pub seed: u64,
}

/// Errors raised by [`generate_blobs`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// `blob_count` was zero.
    #[error("blob count must be positive")]
    ZeroBlobs,
    /// `blob_count` exceeded `point_count`.
    #[error("blob count {blob_count} exceeds point count {point_count}")]
    BlobCountExceedsPointCount {
        /// Requested blobs.
        blob_count: usize,
        /// Requested points.
        point_count: usize,
    },
    /// A float parameter was non-finite or not positive.
    #[error("{parameter} must be finite and positive")]
    InvalidFloatParameter {
        /// Offending parameter.
        parameter: &'static str,
    },
}

/// Points arranged in blobs on a circle, with the blob each point was drawn
/// from.
#[derive(Clone, Debug)]
pub struct SyntheticPoints {
    /// Generated coordinates.
    pub points: Vec<Point>,
    /// Blob of every point.
    pub labels: Vec<usize>,
}

/// Generates `config.point_count` points, identical for identical configs.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is degenerate.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "blob centres are placed by angle around the origin"
)]
pub fn generate_blobs(config: &BlobConfig) -> Result<SyntheticPoints, SyntheticError> {
    validate(config)?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let centres: Vec<Point> = (0..config.blob_count)
        .map(|blob| {
            let angle = blob as f64 / config.blob_count as f64 * 2.0 * PI;
            Point::new(config.separation * angle.cos(), config.separation * angle.sin())
        })
        .collect();

    let mut points = Vec::with_capacity(config.point_count);
    let mut labels = Vec::with_capacity(config.point_count);
    for (index, centre) in centres.iter().cycle().take(config.point_count).enumerate() {
        let dx = rng.gen_range(-config.spread..config.spread);
        let dy = rng.gen_range(-config.spread..config.spread);
        points.push(Point::new(centre.x + dx, centre.y + dy));
        labels.push(index.rem_euclid(config.blob_count));
    }
    Ok(SyntheticPoints { points, labels })
}

fn validate(config: &BlobConfig) -> Result<(), SyntheticError> {
    if config.blob_count == 0 {
        return Err(SyntheticError::ZeroBlobs);
    }
    if config.blob_count > config.point_count {
        return Err(SyntheticError::BlobCountExceedsPointCount {
            blob_count: config.blob_count,
            point_count: config.point_count,
        });
    }
    for (parameter, value) in [("separation", config.separation), ("spread", config.spread)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SyntheticError::InvalidFloatParameter { parameter });
        }
    }
    Ok(())
}
