use std::io::{self, Write};

use crate::LineSink;

/// Writes each line to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Writes each line to the process standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl LineSink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // stderr is unbuffered; no flush needed
        writeln!(io::stderr().lock(), "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingSink(AtomicUsize);

    impl LineSink for CountingSink {
        fn write_line(&self, _line: &str) -> io::Result<()> {
            self.0.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    #[test]
    fn arc_and_box_forward_to_inner_sink() {
        let inner = Arc::new(CountingSink::default());
        let boxed: Box<dyn LineSink> = Box::new(Arc::clone(&inner));
        inner.write_line("direct").unwrap();
        boxed.write_line("via box").unwrap();
        assert_eq!(inner.0.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn std_sinks_accept_lines() {
        StdoutSink::new().write_line("stdout sink smoke").unwrap();
        StderrSink::new().write_line("stderr sink smoke").unwrap();
    }
}
