use std::io;

use thiserror::Error;

/// Errors raised while reading point or label files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PointsProviderError {
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// A token could not be parsed as a number.
    #[error("line {line}: `{token}` is not a valid number")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A point line did not hold exactly two coordinates, or a label line
    /// did not hold exactly one label.
    #[error("line {line}: expected {expected} field(s) but found {found}")]
    WrongArity {
        /// 1-based line number.
        line: usize,
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A coordinate parsed to NaN or infinity.
    #[error("line {line}: coordinates must be finite")]
    NonFiniteCoordinate {
        /// 1-based line number.
        line: usize,
    },
    /// The input held no data lines.
    #[error("input contains no data lines")]
    EmptyInput,
}

impl PointsProviderError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "POINTS_IO",
            Self::Parse { .. } => "POINTS_PARSE",
            Self::WrongArity { .. } => "POINTS_WRONG_ARITY",
            Self::NonFiniteCoordinate { .. } => "POINTS_NON_FINITE_COORDINATE",
            Self::EmptyInput => "POINTS_EMPTY_INPUT",
        }
    }
}
