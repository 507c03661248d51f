//! Builder that assembles a `Chain` from stock stages and custom handlers.
//!
//! Appending a node links it after the previous one. Appending a node whose
//! name is already present replaces the earlier node in place, so the last
//! write for a given handler wins and its position is kept.

use std::path::PathBuf;
use std::sync::Arc;

use logchain_traits::{LineSink, StderrSink, StdoutSink};

use crate::chain::Chain;
use crate::error::{BuildError, Result};
use crate::handler::Handler;
use crate::handlers::{ErrorHandler, FatalErrorHandler, UnknownHandler, WarningHandler};

/// Stock handler kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Fatal,
    Error,
    Warning,
    Unknown,
}

impl Stage {
    /// Order used when nothing else is configured.
    pub const STANDARD: [Stage; 4] = [Stage::Fatal, Stage::Error, Stage::Warning, Stage::Unknown];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Fatal => "fatal",
            Stage::Error => "error",
            Stage::Warning => "warning",
            Stage::Unknown => "unknown",
        }
    }
}

enum Node {
    Stock(Stage),
    Custom(Box<dyn Handler>),
}

impl Node {
    fn name(&self) -> &'static str {
        match self {
            Node::Stock(s) => s.name(),
            Node::Custom(h) => h.name(),
        }
    }
}

/// Builder for `Chain`. Stock stages are materialized on `try_build()` so
/// sinks and the error-log path may be set in any order.
#[derive(Default)]
pub struct ChainBuilder {
    nodes: Vec<Node>,
    error_log: Option<PathBuf>,
    stdout: Option<Arc<dyn LineSink>>,
    stderr: Option<Arc<dyn LineSink>>,
}

impl std::fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainBuilder")
            .field("nodes", &self.nodes.iter().map(Node::name).collect::<Vec<_>>())
            .field("error_log", &self.error_log)
            .finish_non_exhaustive()
    }
}

impl ChainBuilder {
    fn push(mut self, node: Node) -> Self {
        if let Some(slot) = self.nodes.iter_mut().find(|n| n.name() == node.name()) {
            *slot = node;
        } else {
            self.nodes.push(node);
        }
        self
    }

    /// Link a stock stage after the current tail.
    pub fn with_stage(self, stage: Stage) -> Self {
        self.push(Node::Stock(stage))
    }

    /// Link several stock stages, head first.
    pub fn with_stages(self, stages: impl IntoIterator<Item = Stage>) -> Self {
        stages.into_iter().fold(self, Self::with_stage)
    }

    /// Link a caller-provided handler after the current tail.
    pub fn with_handler(self, handler: impl Handler + 'static) -> Self {
        self.push(Node::Custom(Box::new(handler)))
    }

    /// File the error stage appends to. Defaults to `error_log.txt`.
    pub fn with_error_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log = Some(path.into());
        self
    }

    pub fn with_stdout(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.stdout = Some(sink);
        self
    }

    pub fn with_stderr(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.stderr = Some(sink);
        self
    }

    pub fn try_build(self) -> Result<Chain> {
        if self.nodes.is_empty() {
            return Err(eyre::Report::new(BuildError::EmptyChain));
        }
        let error_log = self
            .error_log
            .unwrap_or_else(|| PathBuf::from(logchain_config::DEFAULT_ERROR_LOG));
        if error_log.as_os_str().is_empty() {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "error log path must not be empty",
            )));
        }
        let stdout = self.stdout.unwrap_or_else(|| Arc::new(StdoutSink::new()));
        let stderr = self.stderr.unwrap_or_else(|| Arc::new(StderrSink::new()));

        let has_error_stage = self
            .nodes
            .iter()
            .any(|n| matches!(n, Node::Stock(Stage::Error)));

        let handlers = self
            .nodes
            .into_iter()
            .map(|node| -> Box<dyn Handler> {
                match node {
                    Node::Stock(Stage::Fatal) => Box::new(FatalErrorHandler),
                    Node::Stock(Stage::Error) => Box::new(
                        ErrorHandler::new(error_log.clone()).with_stderr(Arc::clone(&stderr)),
                    ),
                    Node::Stock(Stage::Warning) => {
                        Box::new(WarningHandler::new().with_stdout(Arc::clone(&stdout)))
                    }
                    Node::Stock(Stage::Unknown) => Box::new(UnknownHandler),
                    Node::Custom(h) => h,
                }
            })
            .collect();

        Ok(Chain {
            handlers,
            stderr,
            error_log: has_error_stage.then_some(error_log),
        })
    }
}
