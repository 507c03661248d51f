//! Ordered handler chain and its dispatch loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use logchain_traits::LineSink;

use crate::builder::ChainBuilder;
use crate::error::ChainError;
use crate::handler::Handler;
use crate::message::LogMessage;
use crate::status::{Dispatch, Outcome};

/// Handlers in dispatch order, head first. Built once by `ChainBuilder`.
pub struct Chain {
    pub(crate) handlers: Vec<Box<dyn Handler>>,
    pub(crate) stderr: Arc<dyn LineSink>,
    pub(crate) error_log: Option<PathBuf>,
}

impl core::fmt::Debug for Chain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Chain")
            .field("order", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl Chain {
    /// Start building a chain.
    pub fn builder() -> ChainBuilder {
        ChainBuilder::default()
    }

    /// Handler names, head first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|h| h.name())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// File the stock error stage appends to, if that stage is linked.
    pub fn error_log(&self) -> Option<&Path> {
        self.error_log.as_deref()
    }

    /// Sink for top-level diagnostics (caught conditions).
    pub fn stderr(&self) -> &dyn LineSink {
        self.stderr.as_ref()
    }

    /// Offer `message` to each handler in order until one consumes it.
    ///
    /// A raised condition stops the walk; later handlers never see the message.
    /// A message no handler matches is dropped without error.
    pub fn dispatch(&self, message: &LogMessage) -> Result<Dispatch, ChainError> {
        for handler in &self.handlers {
            match handler.handle(message)? {
                Outcome::Handled => {
                    tracing::debug!(
                        handler = handler.name(),
                        category = %message.category(),
                        "message handled"
                    );
                    return Ok(Dispatch::Handled {
                        by: handler.name(),
                    });
                }
                Outcome::Forward => {
                    tracing::trace!(handler = handler.name(), "forwarding");
                }
            }
        }
        tracing::debug!(category = %message.category(), "no handler matched; message dropped");
        Ok(Dispatch::Dropped)
    }
}
