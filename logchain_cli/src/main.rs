mod cli;
mod error_fmt;
mod logging;

use clap::Parser;
use eyre::{Result, WrapErr};
use logchain_config::{Config, DEFAULT_CONFIG_FILE};
use logchain_core::{ChainBuilder, Dispatch, LogMessage, run_demo, run_guarded};
use std::path::Path;

use crate::cli::{Cli, Commands, JSON_MODE};
use crate::error_fmt::{exit_code_for_condition, exit_code_for_error, format_error_json, humanize};

/// Explicit --config must exist; otherwise ./logchain.toml is used when present.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => logchain_config::load_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                logchain_config::load_file(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let cfg = load_config(cli.config.as_deref())?;
    // Reject bad configs before tracing creates any files.
    cfg.validate().wrap_err("invalid configuration")?;
    logging::init_tracing(cli.json, &cli.log_level, &cfg.logging)?;

    let mut builder = ChainBuilder::from_config(&cfg)?;
    if let Some(path) = cli.error_log {
        builder = builder.with_error_log(path);
    }
    let chain = builder.try_build()?;
    tracing::debug!(?chain, "chain assembled");

    match cli.cmd.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            run_demo(&chain);
            Ok(0)
        }
        Commands::Dispatch { category, text } => {
            let message = LogMessage::new(category.into(), text);
            match run_guarded(&chain, &message) {
                Ok(Dispatch::Handled { by }) => {
                    tracing::info!(handler = by, "handled");
                    Ok(0)
                }
                Ok(Dispatch::Dropped) => {
                    tracing::info!("no handler matched");
                    Ok(0)
                }
                Err(e) => Ok(exit_code_for_condition(&e)),
            }
        }
        Commands::SelfCheck => {
            println!("chain: {}", chain.names().collect::<Vec<_>>().join(" -> "));
            match chain.error_log() {
                Some(path) => println!("error log: {}", path.display()),
                None => println!("error log: (error handler not in chain)"),
            }
            println!("self-check ok");
            Ok(0)
        }
    }
}

fn main() {
    let _ = color_eyre::install();
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            if JSON_MODE.get().copied().unwrap_or(false) {
                eprintln!("{}", format_error_json(&err));
            } else {
                eprintln!("{}", humanize(&err));
            }
            exit_code_for_error(&err)
        }
    };
    std::process::exit(code);
}
