//! Command-line interface of the `arbor` binary.
//!
//! `mst` writes the minimum spanning tree of a point set and `cluster` writes
//! a k-way single-linkage clustering of it, optionally scored against
//! reference class labels. Reports are written as CSV or plotted to PNG or
//! SVG.

mod commands;
mod output;

pub use commands::{
    AlgorithmArg, Cli, CliError, ClusterCommand, Command, ExecutionSummary, InputArgs,
    MstCommand, Report, emit, render_summary, run_cli,
};
pub use output::{OutputFormat, PALETTE, RenderError, render_png, render_svg, write_csv};

#[cfg(test)]
mod test_helpers;
