//! XSLT transformation.

use std::fmt::Debug;
use std::io;

use libxml::parser::Parser;

use crate::error::PipelineError;
use crate::paths::ResolvedFile;

/// Applies a stylesheet to a source document and writes the result file.
pub trait Transformer {
    /// Creates or overwrites `result`. Nothing is written when compilation or
    /// application of the stylesheet fails.
    fn transform(
        &self,
        source: &ResolvedFile,
        stylesheet: &ResolvedFile,
        result: &ResolvedFile,
    ) -> Result<(), PipelineError>;
}

/// XSLT 1.0 through libxslt. The result is serialised by libxml2, so
/// `<xsl:output>` settings (method, encoding, indent) are not applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibxsltTransformer;

impl LibxsltTransformer {
    pub fn new() -> Self {
        Self
    }
}

fn transform_error(stylesheet: &ResolvedFile, message: impl Into<String>) -> PipelineError {
    PipelineError::TransformError {
        stylesheet: stylesheet.path().to_path_buf(),
        message: message.into(),
    }
}

fn engine_message(context: &str, err: impl Debug) -> String {
    format!("{context}: {err:?}")
}

impl Transformer for LibxsltTransformer {
    fn transform(
        &self,
        source: &ResolvedFile,
        stylesheet: &ResolvedFile,
        result: &ResolvedFile,
    ) -> Result<(), PipelineError> {
        source.require_readable()?;
        stylesheet.require_readable()?;

        let document = Parser::default()
            .parse_file(source.as_utf8()?)
            .map_err(|e| transform_error(stylesheet, engine_message("failed to parse source", e)))?;

        let mut compiled = libxslt::parser::parse_file(stylesheet.as_utf8()?).map_err(|e| {
            transform_error(stylesheet, engine_message("failed to compile stylesheet", e))
        })?;

        let output = compiled
            .transform(document, Vec::new())
            .map_err(|e| transform_error(stylesheet, engine_message("transformation failed", e)))?;

        output
            .save_file(result.as_utf8()?)
            .map(|_| ())
            .map_err(|_| PipelineError::OutputWrite {
                path: result.path().to_path_buf(),
                source: io::Error::other("libxml2 could not write the document"),
            })
    }
}
