//! Pipeline runner: check arguments, validate the source, transform it,
//! validate the result against the same schema.
//!
//! Steps run strictly in order and the first error stops the run. A result
//! file written before a later failure is left in place.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::args::{InvocationArguments, ResolvedFiles, SlotPolicy};
use crate::error::PipelineError;
use crate::logging::PipelineLog;
use crate::xml::{LibxmlSchemaValidator, LibxsltTransformer, SchemaValidator, Transformer};

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "from", rename_all = "snake_case")]
pub enum Stage {
    Init,
    ArgsChecked,
    SourceValidated,
    Transformed,
    ResultValidated,
    Done,
    /// Failed while leaving the given stage.
    Failed(FailedFrom),
}

/// Non-terminal stages a run can fail from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedFrom {
    Init,
    ArgsChecked,
    SourceValidated,
    Transformed,
}

impl Stage {
    fn fail(self) -> Stage {
        match self {
            Stage::Init => Stage::Failed(FailedFrom::Init),
            Stage::ArgsChecked => Stage::Failed(FailedFrom::ArgsChecked),
            Stage::SourceValidated => Stage::Failed(FailedFrom::SourceValidated),
            Stage::Transformed => Stage::Failed(FailedFrom::Transformed),
            other => other,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Init => f.write_str("init"),
            Stage::ArgsChecked => f.write_str("arguments checked"),
            Stage::SourceValidated => f.write_str("source validated"),
            Stage::Transformed => f.write_str("transformed"),
            Stage::ResultValidated => f.write_str("result validated"),
            Stage::Done => f.write_str("done"),
            Stage::Failed(from) => write!(f, "failed after {}", from),
        }
    }
}

impl fmt::Display for FailedFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailedFrom::Init => "init",
            FailedFrom::ArgsChecked => "args_checked",
            FailedFrom::SourceValidated => "source_validated",
            FailedFrom::Transformed => "transformed",
        };
        f.write_str(name)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub base_dir: PathBuf,
    pub files: ResolvedFiles,
    /// Completed steps, in order
    pub steps: Vec<&'static str>,
    pub stage: Stage,
}

pub const STEP_CHECK_ARGUMENTS: &str = "check_arguments";
pub const STEP_VALIDATE_SOURCE: &str = "validate_source";
pub const STEP_TRANSFORM: &str = "transform";
pub const STEP_VALIDATE_RESULT: &str = "validate_result";

/// Pipeline runner. Each call to [`Pipeline::run`] starts again from
/// [`Stage::Init`].
pub struct Pipeline<'a, V = LibxmlSchemaValidator, T = LibxsltTransformer> {
    base_dir: PathBuf,
    policy: SlotPolicy,
    validator: V,
    transformer: T,
    log: &'a dyn PipelineLog,
    stage: Stage,
}

impl<'a> Pipeline<'a> {
    /// Pipeline backed by libxml2 and libxslt.
    pub fn new(base_dir: impl Into<PathBuf>, log: &'a dyn PipelineLog) -> Self {
        Self::with_engines(base_dir, LibxmlSchemaValidator, LibxsltTransformer, log)
    }
}

impl<'a, V: SchemaValidator, T: Transformer> Pipeline<'a, V, T> {
    pub fn with_engines(
        base_dir: impl Into<PathBuf>,
        validator: V,
        transformer: T,
        log: &'a dyn PipelineLog,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            policy: SlotPolicy::default(),
            validator,
            transformer,
            log,
            stage: Stage::Init,
        }
    }

    pub fn slot_policy(mut self, policy: SlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run<S: AsRef<str>>(&mut self, arguments: &[S]) -> Result<PipelineReport, PipelineError> {
        self.stage = Stage::Init;
        self.log.info("Start program");
        let result = self.run_steps(arguments);
        match &result {
            Ok(_) => self.log.info("Close program."),
            Err(e) => {
                self.stage = self.stage.fail();
                self.log.error(&format!("Pipeline stopped ({}): {}", self.stage, e));
            }
        }
        result
    }

    fn run_steps<S: AsRef<str>>(&mut self, arguments: &[S]) -> Result<PipelineReport, PipelineError> {
        let mut steps = Vec::with_capacity(4);

        let parsed = InvocationArguments::parse(arguments, self.policy);
        self.log
            .info(&format!("Check input parameters: {}", parsed.is_ok()));
        let parsed = parsed.inspect_err(|_| self.log.error("Arguments check is fail."))?;
        steps.push(STEP_CHECK_ARGUMENTS);
        self.stage = Stage::ArgsChecked;

        let files = parsed.resolve(&self.base_dir);
        self.log.info(&format!(
            "Found folder with files: {}",
            self.base_dir.display()
        ));

        self.log.info("Initiate validate XML by XSD . . .");
        self.validator.validate(&files.source, &files.schema)?;
        self.log.info("Validate XML by XSD: true");
        steps.push(STEP_VALIDATE_SOURCE);
        self.stage = Stage::SourceValidated;

        self.log.info("Initiate transform XML by XSLT . . .");
        self.transformer
            .transform(&files.source, &files.stylesheet, &files.result)?;
        self.log.info(&format!(
            "Transform XML by XSLT and save {}: true",
            parsed.result_xml
        ));
        steps.push(STEP_TRANSFORM);
        self.stage = Stage::Transformed;

        self.log.info("Initiate validate result XML by XSD");
        self.validator.validate(&files.result, &files.schema)?;
        self.log.info("Validate result XML by XSD: true");
        steps.push(STEP_VALIDATE_RESULT);
        self.stage = Stage::ResultValidated;

        self.stage = Stage::Done;
        Ok(PipelineReport {
            base_dir: self.base_dir.clone(),
            files,
            steps,
            stage: self.stage,
        })
    }
}
