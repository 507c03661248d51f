//! Diagnostic tracing setup: console layer plus optional rolling file layer.

use std::path::Path;

use eyre::WrapErr;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

use crate::cli::FILE_GUARD;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn rotation_from(name: Option<&str>) -> Rotation {
    match name {
        Some("daily") => Rotation::DAILY,
        Some("hourly") => Rotation::HOURLY,
        _ => Rotation::NEVER,
    }
}

fn file_layer(cfg: &logchain_config::Logging) -> eyre::Result<Option<BoxedLayer>> {
    let Some(file) = cfg.file.as_deref() else {
        return Ok(None);
    };
    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| eyre::eyre!("logging.file has no file name: {file}"))?;

    let level = cfg.level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).wrap_err("invalid logging.level")?;

    let appender = RollingFileAppender::builder()
        .rotation(rotation_from(cfg.rotation.as_deref()))
        .filename_prefix(name.to_string_lossy().into_owned())
        .build(dir)
        .wrap_err_with(|| format!("open logging.file {file}"))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = FILE_GUARD.set(guard);
    Ok(Some(
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    ))
}

/// Install the global subscriber. Console output goes to stderr so stdout
/// carries only handled warning lines.
pub fn init_tracing(json: bool, level: &str, cfg: &logchain_config::Logging) -> eyre::Result<()> {
    let console_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(level).wrap_err("invalid --log-level")?,
    };
    let console: BoxedLayer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    };

    let mut layers = vec![console];
    if let Some(file) = file_layer(cfg)? {
        layers.push(file);
    }
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .wrap_err("install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_rotation_falls_back_to_never() {
        assert_eq!(rotation_from(Some("daily")), Rotation::DAILY);
        assert_eq!(rotation_from(Some("hourly")), Rotation::HOURLY);
        assert_eq!(rotation_from(None), Rotation::NEVER);
    }

    #[test]
    fn no_file_means_no_file_layer() {
        let cfg = logchain_config::Logging::default();
        assert!(file_layer(&cfg).unwrap().is_none());
    }

    #[test]
    fn unusable_log_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let cfg = logchain_config::Logging {
            file: Some(blocker.join("diag.log").display().to_string()),
            ..Default::default()
        };

        let err = file_layer(&cfg).err().expect("must fail without panicking");
        assert!(err.to_string().contains("open logging.file"));
    }
}
