//! The four stock handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use logchain_traits::{LineSink, StderrSink, StdoutSink};

use crate::error::{ChainError, SinkError};
use crate::handler::Handler;
use crate::logger::FileAppender;
use crate::message::{Category, LogMessage};

/// Raises `ChainError::Fatal` for `FatalError` messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct FatalErrorHandler;

impl Handler for FatalErrorHandler {
    fn name(&self) -> &'static str {
        "fatal"
    }

    fn category(&self) -> Category {
        Category::FatalError
    }

    fn process(&self, message: &LogMessage) -> Result<(), ChainError> {
        tracing::debug!(handler = self.name(), "raising fatal condition");
        Err(ChainError::Fatal(message.text().to_owned()))
    }
}

/// Appends `Error: <text>` to the configured file.
///
/// An unopenable file is reported on stderr and the message still counts as
/// handled.
pub struct ErrorHandler {
    appender: FileAppender,
    stderr: Arc<dyn LineSink>,
}

impl core::fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorHandler")
            .field("path", &self.path())
            .finish()
    }
}

impl ErrorHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            appender: FileAppender::new(path),
            stderr: Arc::new(StderrSink::new()),
        }
    }

    /// Route the open-failure diagnostic somewhere other than process stderr.
    pub fn with_stderr(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.stderr = sink;
        self
    }

    pub fn path(&self) -> &Path {
        self.appender.path()
    }
}

impl Handler for ErrorHandler {
    fn name(&self) -> &'static str {
        "error"
    }

    fn category(&self) -> Category {
        Category::Error
    }

    fn process(&self, message: &LogMessage) -> Result<(), ChainError> {
        match self.appender.append_line(&format!("Error: {}", message.text())) {
            Ok(()) => {}
            Err(e @ SinkError::Open { .. }) => {
                tracing::debug!(error = %e, "error log unavailable; entry dropped");
                if let Err(werr) = self.stderr.write_line(&e.to_string()) {
                    tracing::warn!(error = %werr, "stderr write failed");
                }
            }
            Err(e @ SinkError::Write { .. }) => {
                tracing::warn!(error = %e, "error log write failed");
            }
        }
        Ok(())
    }
}

/// Prints `Warning: <text>` on stdout.
pub struct WarningHandler {
    stdout: Arc<dyn LineSink>,
}

impl core::fmt::Debug for WarningHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WarningHandler").finish_non_exhaustive()
    }
}

impl Default for WarningHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningHandler {
    pub fn new() -> Self {
        Self {
            stdout: Arc::new(StdoutSink::new()),
        }
    }

    pub fn with_stdout(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.stdout = sink;
        self
    }
}

impl Handler for WarningHandler {
    fn name(&self) -> &'static str {
        "warning"
    }

    fn category(&self) -> Category {
        Category::Warning
    }

    fn process(&self, message: &LogMessage) -> Result<(), ChainError> {
        if let Err(e) = self
            .stdout
            .write_line(&format!("Warning: {}", message.text()))
        {
            tracing::warn!(error = %e, "stdout write failed");
        }
        Ok(())
    }
}

/// Raises `ChainError::UnknownMessage` for `Unknown` messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownHandler;

impl Handler for UnknownHandler {
    fn name(&self) -> &'static str {
        "unknown"
    }

    fn category(&self) -> Category {
        Category::Unknown
    }

    fn process(&self, message: &LogMessage) -> Result<(), ChainError> {
        tracing::debug!(handler = self.name(), "raising unknown-message condition");
        Err(ChainError::UnknownMessage(message.text().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{FailingSink, MemorySink};
    use crate::status::Outcome;

    #[test]
    fn fatal_handler_raises_with_text_and_forwards_others() {
        let h = FatalErrorHandler;
        let err = h
            .handle(&LogMessage::new(Category::FatalError, "boom"))
            .unwrap_err();
        assert_eq!(err, ChainError::Fatal("boom".into()));
        assert_eq!(err.to_string(), "Fatal Error: boom");

        for c in [Category::Warning, Category::Error, Category::Unknown] {
            assert_eq!(h.handle(&LogMessage::new(c, "x")), Ok(Outcome::Forward));
        }
    }

    #[test]
    fn unknown_handler_raises_with_text() {
        let err = UnknownHandler
            .handle(&LogMessage::new(Category::Unknown, "???"))
            .unwrap_err();
        assert_eq!(err.text(), "???");
        assert_eq!(err.to_string(), "Unknown message: ???");
    }

    #[test]
    fn warning_handler_prints_one_line() {
        let out = MemorySink::default();
        let h = WarningHandler::new().with_stdout(Arc::new(out.clone()));
        let r = h.handle(&LogMessage::new(Category::Warning, "low disk"));
        assert_eq!(r, Ok(Outcome::Handled));
        assert_eq!(out.lines(), vec!["Warning: low disk".to_string()]);

        assert_eq!(
            h.handle(&LogMessage::new(Category::Error, "x")),
            Ok(Outcome::Forward)
        );
        assert_eq!(out.lines().len(), 1);
    }

    #[test]
    fn error_handler_appends_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error_log.txt");
        let err_sink = MemorySink::default();
        let h = ErrorHandler::new(&path).with_stderr(Arc::new(err_sink.clone()));

        let r = h.handle(&LogMessage::new(Category::Error, "disk failed"));
        assert_eq!(r, Ok(Outcome::Handled));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Error: disk failed\n"
        );
        assert!(err_sink.lines().is_empty());
    }

    #[test]
    fn error_handler_reports_unopenable_file_and_still_handles() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for append.
        let path = dir.path().to_path_buf();
        let err_sink = MemorySink::default();
        let h = ErrorHandler::new(&path).with_stderr(Arc::new(err_sink.clone()));

        let r = h.handle(&LogMessage::new(Category::Error, "lost"));
        assert_eq!(r, Ok(Outcome::Handled));
        assert_eq!(
            err_sink.lines(),
            vec![format!("Failed to open file: {}", path.display())]
        );
    }

    #[test]
    fn error_handler_survives_a_broken_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let h = ErrorHandler::new(dir.path()).with_stderr(Arc::new(FailingSink));

        let r = h.handle(&LogMessage::new(Category::Error, "lost"));
        assert_eq!(r, Ok(Outcome::Handled));
        assert!(format!("{h:?}").contains(&dir.path().display().to_string()));
    }
}
