//! Configuration management for xmlpipe.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project (`.xmlpipe.toml`) and user configuration files
//! - Merging everything into one [`Config`]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::args::SlotPolicy;

/// Project configuration file looked up in the base directory.
pub const PROJECT_CONFIG_FILE: &str = ".xmlpipe.toml";

/// Command-line arguments for xmlpipe
#[derive(Debug, Parser)]
#[command(name = "xmlpipe")]
#[command(about = "Validate an XML file against an XSD, transform it with XSLT, validate the result")]
#[command(version)]
pub struct Args {
    /// `<xml> <xsd> <xslt> <result-xml>`; the count is checked by the pipeline
    #[arg(num_args = 0.., value_name = "FILE")]
    pub files: Vec<String>,

    /// Directory the file arguments are resolved against
    #[arg(long, help = "Base directory for relative file arguments (default: current directory)")]
    pub base_dir: Option<PathBuf>,

    /// Explicit configuration file
    #[arg(long, help = "Configuration file to load instead of the project/user files")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Argument check: 'suffix' (any slot) or 'positional'")]
    pub slot_policy: Option<SlotPolicy>,

    /// Log level for the pipeline
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Print the run report as JSON on success")]
    pub json: bool,
}

/// Contents of a configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_dir: Option<PathBuf>,
    pub slot_policy: Option<SlotPolicy>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content, Some(path))
    }

    pub fn parse(content: &str, source_path: Option<&Path>) -> Result<Self> {
        toml::from_str(content).with_context(|| match source_path {
            Some(path) => format!("Failed to parse config file {}", path.display()),
            None => "Failed to parse config content".to_string(),
        })
    }

    /// Keys set in `self` win over `fallback`.
    fn or(self, fallback: FileConfig) -> FileConfig {
        FileConfig {
            base_dir: self.base_dir.or(fallback.base_dir),
            slot_policy: self.slot_policy.or(fallback.slot_policy),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Positional file arguments, unchecked
    pub files: Vec<String>,
    /// Directory relative file arguments are joined onto
    pub base_dir: PathBuf,
    pub slot_policy: SlotPolicy,
    pub log_level: String,
    pub json: bool,
    /// Configuration files that contributed, most specific first
    pub loaded_from: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let user_config = dirs::config_dir().map(|dir| dir.join("xmlpipe").join("config.toml"));
        Self::from_args(Args::parse(), &cwd, user_config.as_deref())
    }

    /// Create configuration from explicit arguments (useful for testing)
    ///
    /// Precedence: command line, then the explicit or project file, then the
    /// user file, then defaults.
    pub fn from_args(args: Args, cwd: &Path, user_config: Option<&Path>) -> Result<Self> {
        let mut loaded_from = Vec::new();

        let lookup_dir = args.base_dir.as_deref().unwrap_or(cwd);
        let primary = match &args.config {
            Some(path) => {
                loaded_from.push(path.clone());
                FileConfig::load(path)?
            }
            None => {
                let project = lookup_dir.join(PROJECT_CONFIG_FILE);
                if project.is_file() {
                    loaded_from.push(project.clone());
                    FileConfig::load(&project)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let user = match user_config {
            Some(path) if args.config.is_none() && path.is_file() => {
                loaded_from.push(path.to_path_buf());
                FileConfig::load(path)?
            }
            _ => FileConfig::default(),
        };

        let file = primary.or(user);

        let base_dir = match args.base_dir.or(file.base_dir) {
            Some(dir) if dir.is_relative() => cwd.join(dir),
            Some(dir) => dir,
            None => cwd.to_path_buf(),
        };

        Ok(Config {
            files: args.files,
            base_dir,
            slot_policy: args.slot_policy.or(file.slot_policy).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
            json: args.json,
            loaded_from,
        })
    }

    pub fn has_config_file(&self) -> bool {
        !self.loaded_from.is_empty()
    }
}
