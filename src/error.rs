//! Pipeline error taxonomy.
//!
//! Every failure aborts the remaining steps. The binary maps each kind to a
//! distinct process exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::FileRole;

/// Broad classification of a [`PipelineError`], used for exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArguments,
    FileNotFound,
    FileUnreadable,
    SchemaViolation,
    TransformError,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InvalidArguments => 2,
            ErrorKind::FileNotFound => 3,
            ErrorKind::FileUnreadable => 4,
            ErrorKind::SchemaViolation => 5,
            ErrorKind::TransformError => 6,
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid arguments: {reason}")]
    InvalidArguments { reason: String },

    #[error("{role} file not found: {}", path.display())]
    FileNotFound { role: FileRole, path: PathBuf },

    #[error("{role} file unreadable: {}", path.display())]
    FileUnreadable {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write result file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{} does not conform to schema {}: {}",
        document.display(),
        schema.display(),
        errors.join("; ")
    )]
    SchemaViolation {
        document: PathBuf,
        schema: PathBuf,
        errors: Vec<String>,
    },

    #[error("transformation with {} failed: {message}", stylesheet.display())]
    TransformError { stylesheet: PathBuf, message: String },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            PipelineError::FileNotFound { .. } => ErrorKind::FileNotFound,
            PipelineError::FileUnreadable { .. } | PipelineError::OutputWrite { .. } => {
                ErrorKind::FileUnreadable
            }
            PipelineError::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            PipelineError::TransformError { .. } => ErrorKind::TransformError,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}
