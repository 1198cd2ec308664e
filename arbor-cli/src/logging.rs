//! Global `tracing` subscriber for the `arbor` binary.
//!
//! `RUST_LOG` selects the filter (default `info`) and `ARBOR_LOG_FORMAT`
//! chooses between human-readable and JSON lines. Output goes to stderr so
//! CSV and SVG on stdout stay clean. Records from the `log` facade are
//! forwarded into `tracing`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "ARBOR_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ARBOR_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("`{LOG_FORMAT_ENV}` is not valid UTF-8")]
    InvalidUnicode,
    /// `ARBOR_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value found in the environment.
        provided: String,
    },
}

/// Rendering of log records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Multi-field human-readable lines.
    #[default]
    Human,
    /// One JSON object per record, including the span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `ARBOR_LOG_FORMAT`, defaulting to human output.
    ///
    /// # Errors
    /// Returns [`LoggingError`] for a non-UTF-8 or unknown value.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode),
        }
    }
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// When another subscriber already owns the global slot it is kept and a
/// note is printed to stderr.
///
/// # Errors
/// Returns [`LoggingError`] when `ARBOR_LOG_FORMAT` is invalid.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).with_span_list(true).boxed(),
    };

    // A logger installed elsewhere keeps priority over the bridge.
    let _ = LogTracer::init();
    if let Err(err) = tracing_subscriber::registry().with(filter).with(layer).try_init() {
        report_existing_subscriber(&err);
    }
    let _ = INSTALLED.set(());
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "the global subscriber belongs to someone else at this point"
)]
fn report_existing_subscriber(err: &tracing_subscriber::util::TryInitError) {
    eprintln!("keeping the existing tracing subscriber: {err}");
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case(" Human ", LogFormat::Human)]
    #[case("JSON", LogFormat::Json)]
    fn known_formats_parse(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format is known"), expected);
    }

    #[test]
    fn unknown_format_is_reported() {
        let err = "yaml".parse::<LogFormat>().expect_err("yaml is not supported");
        assert!(matches!(
            err,
            LoggingError::UnsupportedFormat { ref provided } if provided == "yaml"
        ));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("first call installs");
        init_logging().expect("second call is a no-op");
    }
}
