use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use arbor_core::points::Point;
use tracing::instrument;

use crate::errors::PointsProviderError;

/// Named, ordered collection of points read from a coordinate file.
///
/// # Examples
/// ```
/// use arbor_providers_points::PointSet;
///
/// let set = PointSet::try_from_reader("demo", "0 0\n\n3.5 -1\n".as_bytes())?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.points()[1].x, 3.5);
/// # Ok::<(), arbor_providers_points::PointsProviderError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    name: String,
    points: Vec<Point>,
}

impl PointSet {
    /// Parses `x y` lines from `reader`.
    ///
    /// # Errors
    /// Returns [`PointsProviderError::WrongArity`] for a line without exactly
    /// two fields, [`PointsProviderError::Parse`] for a non-numeric field,
    /// [`PointsProviderError::NonFiniteCoordinate`] for NaN or infinity,
    /// [`PointsProviderError::EmptyInput`] when no point is present and
    /// [`PointsProviderError::Io`] when reading fails.
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, PointsProviderError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            points.push(parse_point(index + 1, &line)?);
        }
        if points.is_empty() {
            return Err(PointsProviderError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Opens and parses the file at `path`, naming the set after the file
    /// stem.
    ///
    /// # Errors
    /// Returns [`PointsProviderError::Io`] when the file cannot be opened and
    /// any error of [`Self::try_from_reader`].
    #[instrument(name = "points.load", level = "debug", err, skip_all, fields(path = %path.display()))]
    pub fn try_from_path(path: &Path) -> Result<Self, PointsProviderError> {
        let name = path
            .file_stem()
            .map_or_else(|| "points".to_owned(), |stem| stem.to_string_lossy().into_owned());
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Name of the set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in file order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a successfully parsed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the set, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

fn parse_point(line: usize, text: &str) -> Result<Point, PointsProviderError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[x, y] = fields.as_slice() else {
        return Err(PointsProviderError::WrongArity {
            line,
            expected: 2,
            found: fields.len(),
        });
    };
    let point = Point::new(parse_coordinate(line, x)?, parse_coordinate(line, y)?);
    if point.is_finite() {
        Ok(point)
    } else {
        Err(PointsProviderError::NonFiniteCoordinate { line })
    }
}

fn parse_coordinate(line: usize, token: &str) -> Result<f64, PointsProviderError> {
    token.parse().map_err(|_| PointsProviderError::Parse {
        line,
        token: token.to_owned(),
    })
}
