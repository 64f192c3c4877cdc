//! xmlpipe
//!
//! Validates an XML document against an XSD schema, transforms it with an
//! XSLT stylesheet and validates the result against the same schema.
//!
//! This library provides:
//! - Argument checking and explicit path resolution
//! - libxml2 schema validation and libxslt transformation behind traits
//! - The pipeline runner with an injected log sink
//! - Configuration management

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod xml;

// Re-exports for clean public API
pub use args::{InvocationArguments, SlotPolicy, check_arguments};
pub use config::Config;
pub use error::{ErrorKind, PipelineError};
pub use logging::{FacadeLog, MemoryLog, PipelineLog};
pub use paths::{FileRole, ResolvedFile};
pub use pipeline::{Pipeline, PipelineReport, Stage};
pub use xml::{LibxmlSchemaValidator, LibxsltTransformer, SchemaValidator, Transformer};
