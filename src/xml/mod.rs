//! XML engines: XSD validation through libxml2, XSLT through libxslt.

pub mod schema;
pub mod transform;

pub use schema::{LibxmlSchemaValidator, SchemaValidator};
pub use transform::{LibxsltTransformer, Transformer};

use libxml::error::StructuredError;

/// One line per libxml2 diagnostic, without the trailing newline libxml2 adds.
pub(crate) fn format_engine_errors(errors: Vec<StructuredError>) -> Vec<String> {
    errors
        .into_iter()
        .map(|se| {
            se.message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{:?}", se))
        })
        .collect()
}
