//! Test and helper doubles for logchain_core

use std::io;
use std::sync::{Arc, Mutex};

use crate::error::ChainError;
use crate::handler::Handler;
use crate::message::{Category, LogMessage};
use crate::status::Outcome;
use logchain_traits::LineSink;

/// Sink that records lines in memory; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
        Ok(())
    }
}

/// Sink that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LineSink for NullSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose every write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSink;

impl LineSink for FailingSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

/// Handler that never matches and records every message offered to it.
///
/// Place it after a node to observe whether that node forwarded.
#[derive(Debug, Clone)]
pub struct Observer {
    name: &'static str,
    seen: Arc<Mutex<Vec<LogMessage>>>,
}

impl Observer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Vec<LogMessage> {
        self.seen.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl Handler for Observer {
    fn name(&self) -> &'static str {
        self.name
    }

    // Never consulted: `handle` is overridden to always forward.
    fn category(&self) -> Category {
        Category::Unknown
    }

    fn process(&self, _message: &LogMessage) -> Result<(), ChainError> {
        Ok(())
    }

    fn handle(&self, message: &LogMessage) -> Result<Outcome, ChainError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(message.clone());
        }
        Ok(Outcome::Forward)
    }
}
