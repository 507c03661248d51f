//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use logchain_core::Category;
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "logchain", version, about = "Route log messages through a handler chain")]
pub struct Cli {
    /// Path to config TOML; defaults to ./logchain.toml when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the file receiving `Error:` lines
    #[arg(long, value_name = "FILE")]
    pub error_log: Option<PathBuf>,

    /// Log diagnostics as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console diagnostic level (error|warn|info|debug|trace); RUST_LOG wins when set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Command to execute (default: demo)
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

/// Message category as spelled on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CategoryArg {
    Warning,
    Error,
    Fatal,
    Unknown,
}

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Warning => Category::Warning,
            CategoryArg::Error => Category::Error,
            CategoryArg::Fatal => Category::FatalError,
            CategoryArg::Unknown => Category::Unknown,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message of each category through the chain
    Demo,
    /// Send a single message through the chain
    Dispatch {
        /// Message category
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// Message text
        #[arg(long)]
        text: String,
    },
    /// Validate configuration and print the assembled chain
    SelfCheck,
}
