//! Fixtures shared by the CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::fixture;
use tempfile::TempDir;

use super::{AlgorithmArg, InputArgs, OutputFormat};

/// Two tight triples of points far apart, plus their reference labels.
pub(super) const BLOBS: &str = "0 0\n0 1\n1 0\n\n10 10\n10 11\n11 10\n";
pub(super) const BLOB_CLASSES: &str = "4\n4\n4\n7\n7\n7\n";

/// Temporary directory holding the point and class files.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("fixture file is writable");
        path
    }

    pub(super) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub(super) fn root(&self) -> &Path {
        self.dir.path()
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    Workspace {
        dir: TempDir::new().expect("temporary directory is available"),
    }
}

pub(super) fn input(data: PathBuf, algorithm: AlgorithmArg, format: OutputFormat) -> InputArgs {
    InputArgs {
        data,
        algorithm,
        format,
        output: None,
    }
}
