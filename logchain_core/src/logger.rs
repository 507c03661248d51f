use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SinkError;

/// Appends lines to a file, opening it for each write.
///
/// The handle is scoped to `append_line`; it is closed on return, including
/// when the write fails.
#[derive(Debug, Clone)]
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_line(&self, line: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{line}").map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "existing\n").unwrap();

        let app = FileAppender::new(&path);
        app.append_line("first").unwrap();
        app.append_line("second").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "existing\nfirst\nsecond\n");
    }

    #[test]
    fn open_failure_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.txt");

        let err = FileAppender::new(&path).append_line("x").unwrap_err();
        assert!(matches!(err, SinkError::Open { .. }));
        assert_eq!(
            err.to_string(),
            format!("Failed to open file: {}", path.display())
        );
    }
}
