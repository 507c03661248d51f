#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the log chain.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; an empty document yields the stock chain
//!   `fatal -> error -> warning -> unknown` writing to `error_log.txt`.
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default file name for the error log, relative to the working directory.
pub const DEFAULT_ERROR_LOG: &str = "error_log.txt";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "logchain.toml";

/// Handler names accepted in `[chain] order`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HandlerName {
    Fatal,
    Error,
    Warning,
    Unknown,
}

impl HandlerName {
    pub fn as_str(self) -> &'static str {
        match self {
            HandlerName::Fatal => "fatal",
            HandlerName::Error => "error",
            HandlerName::Warning => "warning",
            HandlerName::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ErrorLogCfg {
    /// Append-only file receiving `Error: <text>` lines
    pub path: PathBuf,
}

impl Default for ErrorLogCfg {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ERROR_LOG),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChainCfg {
    /// Handlers in dispatch order, head first
    pub order: Vec<HandlerName>,
}

impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            order: vec![
                HandlerName::Fatal,
                HandlerName::Error,
                HandlerName::Warning,
                HandlerName::Unknown,
            ],
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (diagnostics, not handled messages)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub error_log: ErrorLogCfg,
    pub chain: ChainCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read and parse a config file. Does not validate.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {}: {}", path.display(), e))?;
    load_toml(&text).map_err(|e| eyre::eyre!("invalid configuration in {}: {}", path.display(), e))
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Error log
        if self.error_log.path.as_os_str().is_empty() {
            eyre::bail!("error_log.path must not be empty");
        }

        // Chain
        if self.chain.order.is_empty() {
            eyre::bail!("chain.order must name at least one handler");
        }
        for (i, name) in self.chain.order.iter().enumerate() {
            if self.chain.order[..i].contains(name) {
                eyre::bail!("chain.order lists '{}' more than once", name.as_str());
            }
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly, got '{rot}'");
        }
        if let Some(file) = self.logging.file.as_deref()
            && file.trim().is_empty()
        {
            eyre::bail!("logging.file must not be blank when set");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_stock_chain() {
        let cfg = load_toml("").expect("parse empty");
        assert_eq!(cfg.error_log.path, PathBuf::from(DEFAULT_ERROR_LOG));
        assert_eq!(
            cfg.chain.order,
            vec![
                HandlerName::Fatal,
                HandlerName::Error,
                HandlerName::Warning,
                HandlerName::Unknown
            ]
        );
        assert!(cfg.logging.file.is_none());
        cfg.validate().expect("defaults are valid");
    }

    #[test]
    fn handler_names_are_lowercase() {
        assert!(load_toml("[chain]\norder = [\"Fatal\"]").is_err());
        let cfg = load_toml("[chain]\norder = [\"warning\"]").expect("parse");
        assert_eq!(cfg.chain.order, vec![HandlerName::Warning]);
        assert_eq!(HandlerName::Warning.as_str(), "warning");
    }
}
