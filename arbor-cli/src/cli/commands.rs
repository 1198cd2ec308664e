//! Argument parsing and command execution.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::clustering_quality::{
    ClusteringQualityError, ClusteringQualityScore, clustering_quality_score,
};
use arbor_core::points::{Point, complete_graph};
use arbor_core::{Algorithm, ArborError, ClassAssignment, SpanningTree};
use arbor_providers_points::{PointSet, PointsProviderError, read_class_labels_from_path};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::output::{OutputFormat, RenderError, render_png, render_svg, write_csv};

const STDOUT: &str = "<stdout>";

/// Top-level arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    version,
    about = "Minimum spanning trees and MST clustering of planar points."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write the minimum spanning tree of the complete Euclidean graph.
    Mst(MstCommand),
    /// Split the points into `k` clusters by cutting the heaviest tree edges.
    Cluster(ClusterCommand),
}

/// Options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// Coordinate file with one whitespace-separated `x y` pair per line.
    pub data: PathBuf,

    /// Spanning tree algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Kruskal)]
    pub algorithm: AlgorithmArg,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Destination file; stdout when omitted. Required for PNG.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    /// Rejects PNG output without a destination file before any work is done.
    fn check_destination(&self) -> Result<(), CliError> {
        match (self.format, &self.output) {
            (OutputFormat::Png, None) => Err(CliError::MissingOutput { format: "png" }),
            _ => Ok(()),
        }
    }
}

/// Options of `arbor mst`.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Options of `arbor cluster`.
#[derive(Debug, Args, Clone)]
pub struct ClusterCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of clusters; clamped to the number of points.
    #[arg(long, short = 'k')]
    pub clusters: usize,

    /// Reference labels, one integer per line, to score the clustering with.
    #[arg(long)]
    pub classes: Option<PathBuf>,
}

/// Algorithm choice on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Kruskal's algorithm with union-find.
    #[default]
    Kruskal,
    /// Prim's algorithm with a binary heap.
    Prim,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
        }
    }
}

/// Errors surfaced while executing a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Creating or writing an output file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading points or labels failed.
    #[error("failed to read `{path}`: {source}")]
    Points {
        /// File being read.
        path: PathBuf,
        /// Provider error.
        #[source]
        source: PointsProviderError,
    },
    /// Graph construction or the MST computation failed.
    #[error(transparent)]
    Core(#[from] ArborError),
    /// The class labels could not be compared with the clustering.
    #[error(transparent)]
    Quality(#[from] ClusteringQualityError),
    /// Plotting the report failed.
    #[error("failed to render `{path}`: {source}")]
    Render {
        /// Destination of the image.
        path: PathBuf,
        /// Backend failure.
        #[source]
        source: RenderError,
    },
    /// A binary format was requested without an output file.
    #[error("{format} output cannot be written to stdout; pass --output")]
    MissingOutput {
        /// Name of the requested format.
        format: &'static str,
    },
}

impl CliError {
    /// Stable code of the underlying library error, when there is one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Points { source, .. } => Some(source.code()),
            Self::Core(err) => Some(err.code().as_str()),
            Self::Io { .. }
            | Self::Quality(_)
            | Self::Render { .. }
            | Self::MissingOutput { .. } => None,
        }
    }
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Result of `arbor mst`.
    Tree(SpanningTree),
    /// Result of `arbor cluster`.
    Clusters {
        /// Cluster of every point.
        assignment: ClassAssignment,
        /// Agreement with the reference labels, when supplied.
        quality: Option<ClusteringQualityScore>,
    },
}

/// Outcome of a command together with where and how to write it.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the point set, taken from the file stem.
    pub data_source: String,
    /// Algorithm that produced the report.
    pub algorithm: Algorithm,
    /// Input points, needed to draw PNG and SVG output.
    pub points: Vec<Point>,
    /// Computed tree or clustering.
    pub report: Report,
    /// Requested encoding.
    pub format: OutputFormat,
    /// Requested destination.
    pub output: Option<PathBuf>,
}

/// Executes `cli` and returns its outcome without writing it.
///
/// # Errors
/// Returns [`CliError`] when reading input, building the graph or scoring
/// the result fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, InputArgs, MstCommand, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 0\n3 4\n3 0\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         input: InputArgs {
///             data: file.path().to_path_buf(),
///             algorithm: Default::default(),
///             format: Default::default(),
///             output: None,
///         },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// let Report::Tree(tree) = summary.report else { unreachable!() };
/// assert_eq!(tree.total_weight(), 7.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Mst(command) => {
            span.record("command", "mst");
            run_mst(command)?
        }
        Command::Cluster(command) => {
            span.record("command", "cluster");
            run_cluster(command)?
        }
    };
    info!(
        data_source = summary.data_source.as_str(),
        algorithm = summary.algorithm.as_str(),
        points = summary.points.len(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(algorithm = field::Empty, total_weight = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let MstCommand { input } = command;
    input.check_destination()?;
    let algorithm = Algorithm::from(input.algorithm);
    let span = Span::current();
    span.record("algorithm", algorithm.as_str());

    let set = load_points(&input.data)?;
    let graph = complete_graph(set.points())?;
    let tree = algorithm.mst(&graph)?;
    span.record("total_weight", tree.total_weight());

    Ok(summarise(set, algorithm, Report::Tree(tree), input))
}

#[instrument(
    name = "cli.cluster",
    err,
    skip(command),
    fields(algorithm = field::Empty, k = command.clusters, clusters = field::Empty),
)]
pub(super) fn run_cluster(command: ClusterCommand) -> Result<ExecutionSummary, CliError> {
    let ClusterCommand {
        input,
        clusters: k,
        classes,
    } = command;
    input.check_destination()?;
    let algorithm = Algorithm::from(input.algorithm);
    let span = Span::current();
    span.record("algorithm", algorithm.as_str());

    let set = load_points(&input.data)?;
    let graph = complete_graph(set.points())?;
    let assignment = algorithm.clustering(&graph, k)?;
    span.record("clusters", assignment.cluster_count());

    let quality = classes
        .as_deref()
        .map(|path| score_against(path, &assignment))
        .transpose()?;
    if let Some(score) = quality {
        info!(ari = score.ari, nmi = score.nmi, "scored against reference labels");
    }

    Ok(summarise(
        set,
        algorithm,
        Report::Clusters {
            assignment,
            quality,
        },
        input,
    ))
}

#[instrument(name = "cli.load_points", err, skip_all, fields(path = %path.display(), points = field::Empty))]
pub(super) fn load_points(path: &Path) -> Result<PointSet, CliError> {
    let set = PointSet::try_from_path(path).map_err(|source| CliError::Points {
        path: path.to_path_buf(),
        source,
    })?;
    Span::current().record("points", set.len());
    Ok(set)
}

fn score_against(
    path: &Path,
    assignment: &ClassAssignment,
) -> Result<ClusteringQualityScore, CliError> {
    let reference = read_class_labels_from_path(path).map_err(|source| CliError::Points {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clustering_quality_score(&reference, &assignment.labels())?)
}

fn summarise(
    set: PointSet,
    algorithm: Algorithm,
    report: Report,
    input: InputArgs,
) -> ExecutionSummary {
    ExecutionSummary {
        data_source: set.name().to_owned(),
        algorithm,
        points: set.into_points(),
        report,
        format: input.format,
        output: input.output,
    }
}

/// Writes the report to the summary's output file, or to `stdout` when no
/// file was requested. With an output file a short summary goes to `stdout`
/// instead.
///
/// # Errors
/// Returns [`CliError::Io`] when a file or `stdout` cannot be written,
/// [`CliError::Render`] when plotting fails and [`CliError::MissingOutput`]
/// for PNG output without a file.
pub fn emit(summary: &ExecutionSummary, stdout: &mut impl Write) -> Result<(), CliError> {
    let Some(path) = &summary.output else {
        return write_stream(summary, stdout, Path::new(STDOUT));
    };
    if summary.format == OutputFormat::Png {
        render_png(summary, path).map_err(|source| CliError::Render {
            path: path.clone(),
            source,
        })?;
    } else {
        let mut file = BufWriter::new(File::create(path).map_err(io_error(path))?);
        write_stream(summary, &mut file, path)?;
        file.flush().map_err(io_error(path))?;
    }
    render_summary(summary, stdout).map_err(io_error(Path::new(STDOUT)))
}

/// Writes a text encoding of the report; PNG has none.
fn write_stream(
    summary: &ExecutionSummary,
    writer: &mut impl Write,
    path: &Path,
) -> Result<(), CliError> {
    match summary.format {
        OutputFormat::Csv => write_csv(summary, writer).map_err(io_error(path)),
        OutputFormat::Svg => {
            let svg = render_svg(summary).map_err(|source| CliError::Render {
                path: path.to_path_buf(),
                source,
            })?;
            writer.write_all(svg.as_bytes()).map_err(io_error(path))
        }
        OutputFormat::Png => Err(CliError::MissingOutput { format: "png" }),
    }
}

fn io_error(path: &Path) -> impl Fn(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Renders a short human-readable description of `summary`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "algorithm: {}", summary.algorithm.as_str())?;
    writeln!(writer, "points: {}", summary.points.len())?;
    match &summary.report {
        Report::Tree(tree) => {
            writeln!(writer, "edges: {}", tree.len())?;
            writeln!(writer, "total weight: {}", tree.total_weight())?;
        }
        Report::Clusters {
            assignment,
            quality,
        } => {
            writeln!(writer, "clusters: {}", assignment.cluster_count())?;
            if let Some(score) = quality {
                writeln!(writer, "ari: {:.4}", score.ari)?;
                writeln!(writer, "nmi: {:.4}", score.nmi)?;
            }
        }
    }
    if let Some(path) = &summary.output {
        writeln!(writer, "output: {}", path.display())?;
    }
    Ok(())
}
