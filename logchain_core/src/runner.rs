//! Top-level dispatch: raised conditions are caught per message and reported
//! on the chain's stderr sink, so one failing dispatch does not stop the next.

use crate::chain::Chain;
use crate::error::ChainError;
use crate::message::{Category, LogMessage};
use crate::status::Dispatch;

/// Prefix for caught conditions on stderr.
pub const CAUGHT_PREFIX: &str = "Caught exception: ";

/// Dispatch one message, reporting a raised condition before returning it.
pub fn run_guarded(chain: &Chain, message: &LogMessage) -> Result<Dispatch, ChainError> {
    let result = chain.dispatch(message);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "dispatch raised");
        if let Err(werr) = chain.stderr().write_line(&format!("{CAUGHT_PREFIX}{e}")) {
            tracing::warn!(error = %werr, "stderr write failed");
        }
    }
    result
}

/// The fixed message sequence of the demo run.
pub fn demo_messages() -> [LogMessage; 4] {
    [
        LogMessage::new(Category::Warning, "This is a warning message."),
        LogMessage::new(Category::Error, "This is an error message."),
        LogMessage::new(Category::FatalError, "This is a fatal error message."),
        LogMessage::new(Category::Unknown, "This is an unknown message."),
    ]
}

/// Per-message results of a batch run, in dispatch order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<Result<Dispatch, ChainError>>,
}

impl RunReport {
    pub fn handled(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, Ok(Dispatch::Handled { .. })))
            .count()
    }

    pub fn dropped(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, Ok(Dispatch::Dropped)))
            .count()
    }

    pub fn raised(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }
}

/// Dispatch each message independently through `run_guarded`.
pub fn run_all<'a>(chain: &Chain, messages: impl IntoIterator<Item = &'a LogMessage>) -> RunReport {
    let results = messages
        .into_iter()
        .map(|m| run_guarded(chain, m))
        .collect();
    let report = RunReport { results };
    tracing::info!(
        handled = report.handled(),
        dropped = report.dropped(),
        raised = report.raised(),
        "run finished"
    );
    report
}

/// Run the fixed demo sequence.
pub fn run_demo(chain: &Chain) -> RunReport {
    run_all(chain, demo_messages().iter())
}
