//! File path resolution against an explicit base directory.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::PipelineError;

/// Which pipeline input or output a path stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    Source,
    Schema,
    Stylesheet,
    Result,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileRole::Source => "source",
            FileRole::Schema => "schema",
            FileRole::Stylesheet => "stylesheet",
            FileRole::Result => "result",
        };
        f.write_str(name)
    }
}

/// A path joined with the base directory. Nothing is checked on disk until
/// [`ResolvedFile::require_readable`] or an engine call touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    role: FileRole,
    path: PathBuf,
}

impl ResolvedFile {
    /// Absolute arguments are kept as given; relative ones are joined onto `base`.
    pub fn resolve(role: FileRole, base: &Path, argument: &str) -> Self {
        Self {
            role,
            path: base.join(argument),
        }
    }

    pub fn role(&self) -> FileRole {
        self.role
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file must exist and open for reading. libxml2 folds both failures
    /// into its own parse errors, so they are checked up front.
    pub fn require_readable(&self) -> Result<&Path, PipelineError> {
        if !self.path.is_file() {
            return Err(PipelineError::FileNotFound {
                role: self.role,
                path: self.path.clone(),
            });
        }
        File::open(&self.path).map_err(|source| PipelineError::FileUnreadable {
            role: self.role,
            path: self.path.clone(),
            source,
        })?;
        Ok(&self.path)
    }

    /// libxml2 only takes UTF-8 file names.
    pub fn as_utf8(&self) -> Result<&str, PipelineError> {
        self.path.to_str().ok_or_else(|| PipelineError::FileUnreadable {
            role: self.role,
            path: self.path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "path is not valid UTF-8",
            ),
        })
    }
}

impl fmt::Display for ResolvedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
