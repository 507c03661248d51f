//! Human-readable error descriptions and structured JSON error formatting.

use logchain_core::ChainError;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use logchain_core::error::BuildError;

    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::EmptyChain => {
                "What happened: The handler chain is empty.\nLikely causes: [chain] order lists no handlers.\nHow to fix: Name at least one of fatal, error, warning, unknown in chain.order.".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or empty values in the TOML or on the command line.\nHow to fix: Edit the config file or pass --error-log, then rerun."
            ),
        };
    }

    let msg = format!("{err:#}");
    let lower = msg.to_ascii_lowercase();

    if lower.starts_with("read config") {
        return format!(
            "What happened: Could not read the config file.\nLikely causes: Wrong --config path or missing permissions.\nHow to fix: Check the path and rerun. Original: {msg}"
        );
    }

    if lower.starts_with("open logging.file") {
        return format!(
            "What happened: Could not open the diagnostic log file.\nLikely causes: [logging] file points into a missing or non-directory path, or permissions are missing.\nHow to fix: Point logging.file at a writable location. Original: {msg}"
        );
    }

    if lower.contains("invalid configuration") {
        return format!(
            "What happened: Configuration is invalid.\nLikely causes: Unknown handler names, duplicates in chain.order, or a bad logging section.\nHow to fix: Edit the TOML config and try again. Original: {msg}"
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes for conditions raised by a single dispatch.
pub fn exit_code_for_condition(err: &ChainError) -> i32 {
    match err {
        ChainError::Fatal(_) => 3,
        ChainError::UnknownMessage(_) => 4,
    }
}

/// Setup and configuration failures.
pub fn exit_code_for_error(_err: &eyre::Report) -> i32 {
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = match err.downcast_ref::<logchain_core::error::BuildError>() {
        Some(logchain_core::error::BuildError::EmptyChain) => "EmptyChain",
        Some(logchain_core::error::BuildError::InvalidConfig(_)) => "InvalidConfig",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
