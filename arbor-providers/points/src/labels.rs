use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::PointsProviderError;

/// Reads one non-negative integer class label per non-blank line.
///
/// # Errors
/// Returns [`PointsProviderError::WrongArity`] for a line holding more than
/// one token, [`PointsProviderError::Parse`] for a token that is not a
/// non-negative integer, [`PointsProviderError::EmptyInput`] when no label is
/// present and [`PointsProviderError::Io`] when reading fails.
///
/// # Examples
/// ```
/// use arbor_providers_points::read_class_labels;
///
/// assert_eq!(read_class_labels("0\n2\n\n1\n".as_bytes())?, vec![0, 2, 1]);
/// # Ok::<(), arbor_providers_points::PointsProviderError>(())
/// ```
pub fn read_class_labels(reader: impl BufRead) -> Result<Vec<usize>, PointsProviderError> {
    let mut labels = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            continue;
        };
        let extra = tokens.count();
        if extra > 0 {
            return Err(PointsProviderError::WrongArity {
                line: index + 1,
                expected: 1,
                found: extra + 1,
            });
        }
        let label = token.parse().map_err(|_| PointsProviderError::Parse {
            line: index + 1,
            token: token.to_owned(),
        })?;
        labels.push(label);
    }
    if labels.is_empty() {
        return Err(PointsProviderError::EmptyInput);
    }
    Ok(labels)
}

/// Opens `path` and reads it with [`read_class_labels`].
///
/// # Errors
/// Returns [`PointsProviderError::Io`] when the file cannot be opened and
/// any error of [`read_class_labels`].
pub fn read_class_labels_from_path(path: &Path) -> Result<Vec<usize>, PointsProviderError> {
    read_class_labels(BufReader::new(File::open(path)?))
}
