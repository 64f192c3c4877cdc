//! Logging sinks handed to the pipeline.
//!
//! The library never installs a global logger. The runner logs through a
//! [`PipelineLog`] supplied at construction; the binary passes a
//! [`FacadeLog`] backed by `env_logger`, tests pass a [`MemoryLog`].

use std::cell::RefCell;

use log::Level;

pub const LOG_TARGET: &str = "xmlpipe::pipeline";

pub trait PipelineLog {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLog;

impl PipelineLog for FacadeLog {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{}", message);
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: RefCell<Vec<(Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.records
            .borrow()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl PipelineLog for MemoryLog {
    fn log(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}
