//! The capability every chain node implements.

use crate::error::ChainError;
use crate::message::{Category, LogMessage};
use crate::status::Outcome;

/// A chain node that consumes messages of exactly one category.
///
/// Implementors supply the category they own and the terminal action;
/// `handle` provides the shared match-or-forward behaviour.
pub trait Handler: Send + Sync {
    /// Stable name, also the identity used when relinking a chain.
    fn name(&self) -> &'static str;

    /// Category this handler consumes.
    fn category(&self) -> Category;

    /// Terminal action for a matching message.
    fn process(&self, message: &LogMessage) -> Result<(), ChainError>;

    fn handle(&self, message: &LogMessage) -> Result<Outcome, ChainError> {
        if message.category() != self.category() {
            return Ok(Outcome::Forward);
        }
        self.process(message)?;
        Ok(Outcome::Handled)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn category(&self) -> Category {
        (**self).category()
    }

    fn process(&self, message: &LogMessage) -> Result<(), ChainError> {
        (**self).process(message)
    }

    fn handle(&self, message: &LogMessage) -> Result<Outcome, ChainError> {
        (**self).handle(message)
    }
}
