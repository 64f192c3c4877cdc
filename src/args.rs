//! Argument checking.
//!
//! The default check is deliberately loose: every argument must end in
//! `.xml`, `.xsd` or `.xslt`, but no argument is bound to a slot. Slot-aware
//! checking is available through [`SlotPolicy::Positional`].

use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::PipelineError;
use crate::paths::{FileRole, ResolvedFile};

/// Number of positional arguments the pipeline consumes.
pub const ARGUMENT_COUNT: usize = 4;

static XML_FAMILY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\.x(ml|sd|slt)$").expect("valid suffix regex"));

/// Expected suffix for each slot when checking positionally.
const SLOT_SUFFIXES: [&str; ARGUMENT_COUNT] = [".xml", ".xsd", ".xslt", ".xml"];

/// How strictly arguments are matched against their slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPolicy {
    /// Any argument may carry any of the three suffixes.
    #[default]
    Suffix,
    /// `<xml> <xsd> <xslt> <xml>`, in that order.
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotPolicyParseError {
    #[error("invalid slot policy: {input} (expected 'suffix' or 'positional')")]
    Invalid { input: String },
}

impl FromStr for SlotPolicy {
    type Err = SlotPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suffix" => Ok(SlotPolicy::Suffix),
            "positional" => Ok(SlotPolicy::Positional),
            _ => Err(SlotPolicyParseError::Invalid {
                input: s.to_string(),
            }),
        }
    }
}

/// Returns `false` for an empty sequence, otherwise whether every argument
/// ends in one of the XML family suffixes.
pub fn check_arguments<S: AsRef<str>>(arguments: &[S]) -> bool {
    !arguments.is_empty()
        && arguments
            .iter()
            .all(|arg| XML_FAMILY_SUFFIX.is_match(arg.as_ref()))
}

/// Slot-aware variant of [`check_arguments`].
pub fn check_arguments_positional<S: AsRef<str>>(arguments: &[S]) -> bool {
    arguments.len() == ARGUMENT_COUNT
        && arguments
            .iter()
            .zip(SLOT_SUFFIXES)
            .all(|(arg, suffix)| {
                let arg = arg.as_ref();
                arg.len() > suffix.len() && arg.ends_with(suffix)
            })
}

impl SlotPolicy {
    pub fn check<S: AsRef<str>>(self, arguments: &[S]) -> bool {
        match self {
            SlotPolicy::Suffix => check_arguments(arguments),
            SlotPolicy::Positional => check_arguments_positional(arguments),
        }
    }
}

/// The four checked arguments, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArguments {
    pub xml: String,
    pub xsd: String,
    pub xslt: String,
    pub result_xml: String,
}

impl InvocationArguments {
    pub fn parse<S: AsRef<str>>(arguments: &[S], policy: SlotPolicy) -> Result<Self, PipelineError> {
        if !policy.check(arguments) {
            let reason = if arguments.is_empty() {
                "no arguments given".to_string()
            } else {
                let joined: Vec<&str> = arguments.iter().map(|a| a.as_ref()).collect();
                match policy {
                    SlotPolicy::Suffix => format!(
                        "every argument must end in .xml, .xsd or .xslt, got [{}]",
                        joined.join(", ")
                    ),
                    SlotPolicy::Positional => format!(
                        "expected <xml> <xsd> <xslt> <xml>, got [{}]",
                        joined.join(", ")
                    ),
                }
            };
            return Err(PipelineError::InvalidArguments { reason });
        }

        match arguments {
            [xml, xsd, xslt, result_xml] => Ok(Self {
                xml: xml.as_ref().to_string(),
                xsd: xsd.as_ref().to_string(),
                xslt: xslt.as_ref().to_string(),
                result_xml: result_xml.as_ref().to_string(),
            }),
            _ => Err(PipelineError::InvalidArguments {
                reason: format!(
                    "expected {} arguments, got {}",
                    ARGUMENT_COUNT,
                    arguments.len()
                ),
            }),
        }
    }

    pub fn resolve(&self, base: &Path) -> ResolvedFiles {
        ResolvedFiles {
            source: ResolvedFile::resolve(FileRole::Source, base, &self.xml),
            schema: ResolvedFile::resolve(FileRole::Schema, base, &self.xsd),
            stylesheet: ResolvedFile::resolve(FileRole::Stylesheet, base, &self.xslt),
            result: ResolvedFile::resolve(FileRole::Result, base, &self.result_xml),
        }
    }
}

/// All four pipeline files after joining with the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFiles {
    pub source: ResolvedFile,
    pub schema: ResolvedFile,
    pub stylesheet: ResolvedFile,
    pub result: ResolvedFile,
}
