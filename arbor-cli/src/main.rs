//! `arbor`: minimum spanning trees and MST clustering of planar point sets.
//!
//! Reads a coordinate file, runs the requested command and writes the
//! resulting CSV, PNG or SVG to `--output` or stdout. Diagnostics go to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use arbor_cli::{
    cli::{Cli, CliError, emit, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("command failed")?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    emit(&summary, &mut stdout).context("failed to write output")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<CliError>()
                .and_then(CliError::code)
                .map(field::display);
            error!(error = %format!("{err:#}"), code, "arbor failed");
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available when its initialisation fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
