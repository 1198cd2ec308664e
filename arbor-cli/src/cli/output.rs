//! CSV encodings and plotted images of command reports.
//!
//! Images are drawn with `plotters`: tree edges in black over red vertex
//! markers, or points coloured by cluster. PNG goes through the bitmap
//! backend and needs a file; SVG is rendered to a string.

use std::io::{self, Write};
use std::ops::Range;
use std::path::Path;

use arbor_core::points::Point;
use arbor_core::{ClassAssignment, SpanningTree};
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use super::commands::{ExecutionSummary, Report};

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated rows with a header line.
    #[default]
    Csv,
    /// Raster plot; requires an output file.
    Png,
    /// Vector plot.
    Svg,
}

/// Fill colours of cluster ids `0..10`; larger ids wrap around.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(0, 0, 0),       // black
    RGBColor(255, 0, 255),   // magenta
    RGBColor(0, 128, 0),     // green
    RGBColor(255, 165, 0),   // orange
    RGBColor(128, 128, 128), // gray
    RGBColor(255, 0, 0),     // red
    RGBColor(0, 0, 255),     // blue
    RGBColor(255, 255, 0),   // yellow
    RGBColor(128, 0, 128),   // purple
    RGBColor(0, 255, 255),   // cyan
];

const CANVAS: (u32, u32) = (800, 800);
const MARGIN: i32 = 20;
const MARKER_RADIUS: i32 = 3;

/// Failure reported by a plotting backend.
#[derive(Debug, Error)]
#[error("failed to draw plot: {message}")]
pub struct RenderError {
    message: String,
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Writes the report of `summary` as CSV.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn write_csv<W: Write>(summary: &ExecutionSummary, writer: &mut W) -> io::Result<()> {
    match &summary.report {
        Report::Tree(tree) => write_tree_csv(tree, writer),
        Report::Clusters { assignment, .. } => write_clusters_csv(assignment, writer),
    }
}

/// Plots the report of `summary` into an SVG document.
///
/// # Errors
/// Returns [`RenderError`] when the backend fails.
pub fn render_svg(summary: &ExecutionSummary) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CANVAS).into_drawing_area();
        plot(&root, &summary.points, &summary.report)?;
    }
    Ok(svg)
}

/// Plots the report of `summary` into a PNG file at `path`.
///
/// # Errors
/// Returns [`RenderError`] when drawing or encoding fails, including when
/// `path` cannot be created.
pub fn render_png(summary: &ExecutionSummary, path: &Path) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    plot(&root, &summary.points, &summary.report)
}

pub(super) fn write_tree_csv<W: Write>(tree: &SpanningTree, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "source,destination,weight")?;
    for edge in tree.edges() {
        writeln!(writer, "{},{},{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}

pub(super) fn write_clusters_csv<W: Write>(
    assignment: &ClassAssignment,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "class_id")?;
    for cluster in assignment.assignments() {
        writeln!(writer, "{}", cluster.get())?;
    }
    Ok(())
}

/// Palette colour of `cluster`.
#[must_use]
pub(super) fn colour(cluster: usize) -> RGBColor {
    PALETTE
        .get(cluster.rem_euclid(PALETTE.len()))
        .copied()
        .unwrap_or(BLACK)
}

fn plot<DB>(
    root: &DrawingArea<DB, Shift>,
    points: &[Point],
    report: &Report,
) -> Result<(), RenderError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root).margin(MARGIN).build_cartesian_2d(
        axis_range(points.iter().map(|point| point.x)),
        axis_range(points.iter().map(|point| point.y)),
    )?;

    match report {
        Report::Tree(tree) => {
            chart.draw_series(tree.edges().iter().filter_map(|edge| {
                let a = points.get(edge.source())?;
                let b = points.get(edge.target())?;
                Some(PathElement::new(vec![(a.x, a.y), (b.x, b.y)], BLACK))
            }))?;
            chart.draw_series(
                points
                    .iter()
                    .map(|point| Circle::new((point.x, point.y), MARKER_RADIUS, RED.filled())),
            )?;
        }
        Report::Clusters { assignment, .. } => {
            chart.draw_series(points.iter().zip(assignment.assignments()).map(
                |(point, cluster)| {
                    Circle::new(
                        (point.x, point.y),
                        MARKER_RADIUS,
                        colour(cluster.get()).filled(),
                    )
                },
            ))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Smallest range covering `values`, widened when it would be empty.
#[expect(
    clippy::float_arithmetic,
    reason = "degenerate extents are padded by one unit"
)]
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
        (low.min(value), high.max(value))
    });
    if low > high {
        0.0..1.0
    } else if low == high {
        (low - 1.0)..(high + 1.0)
    } else {
        low..high
    }
}
