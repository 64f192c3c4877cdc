//! Schema validation.

use libxml::schemas::{SchemaParserContext, SchemaValidationContext};

use crate::error::PipelineError;
use crate::paths::ResolvedFile;

use super::format_engine_errors;

/// Validates a document file against an XSD file.
pub trait SchemaValidator {
    /// `Ok(())` means the document conforms. A missing file yields
    /// `FileNotFound` and a file that cannot be opened `FileUnreadable`. An
    /// invalid document or an uncompilable schema yields `SchemaViolation`.
    fn validate(&self, document: &ResolvedFile, schema: &ResolvedFile) -> Result<(), PipelineError>;
}

/// libxml2-backed validator. The schema is compiled on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibxmlSchemaValidator;

impl LibxmlSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    fn compile(&self, schema: &ResolvedFile) -> Result<SchemaValidationContext, Vec<String>> {
        let xsd_path = schema.as_utf8().map_err(|e| vec![e.to_string()])?;
        let mut parser_ctx = SchemaParserContext::from_file(xsd_path);
        SchemaValidationContext::from_parser(&mut parser_ctx).map_err(|errors| {
            let mut errors = format_engine_errors(errors);
            if errors.is_empty() {
                errors.push("schema could not be compiled".to_string());
            }
            errors
        })
    }
}

impl SchemaValidator for LibxmlSchemaValidator {
    fn validate(&self, document: &ResolvedFile, schema: &ResolvedFile) -> Result<(), PipelineError> {
        document.require_readable()?;
        schema.require_readable()?;
        let xml_path = document.as_utf8()?;

        let violation = |errors: Vec<String>| PipelineError::SchemaViolation {
            document: document.path().to_path_buf(),
            schema: schema.path().to_path_buf(),
            errors,
        };

        let mut validation_ctx = self.compile(schema).map_err(violation)?;
        validation_ctx.validate_file(xml_path).map_err(|errors| {
            let mut errors = format_engine_errors(errors);
            if errors.is_empty() {
                errors.push("document rejected by schema".to_string());
            }
            violation(errors)
        })
    }
}
