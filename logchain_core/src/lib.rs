#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Chain-of-responsibility routing for log messages.
//!
//! A `Chain` holds handlers in order. Each message is offered to the head;
//! a handler either consumes it (prints, appends to a file, or raises a
//! condition) or forwards it to the next node. Messages no handler matches
//! are dropped.
//!
//! ## Architecture
//!
//! - **Messages**: `LogMessage` and its `Category` (`message` module)
//! - **Handlers**: the `Handler` capability and the four stock handlers
//! - **Chain**: ordered dispatch loop (`chain`) and its builder (`builder`)
//! - **Runner**: per-message catch and report of raised conditions (`runner`)
//!
//! Raised conditions are plain `ChainError` values; nothing unwinds.

pub mod builder;
pub mod chain;
pub mod conversions;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod logger;
pub mod message;
pub mod mocks;
pub mod runner;
pub mod status;

pub use builder::{ChainBuilder, Stage};
pub use chain::Chain;
pub use error::{BuildError, ChainError, SinkError};
pub use handler::Handler;
pub use handlers::{ErrorHandler, FatalErrorHandler, UnknownHandler, WarningHandler};
pub use message::{Category, LogMessage};
pub use runner::{RunReport, run_all, run_demo, run_guarded};
pub use status::{Dispatch, Outcome};
