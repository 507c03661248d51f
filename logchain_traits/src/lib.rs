pub mod sink;

pub use sink::{StderrSink, StdoutSink};

/// Line-oriented output used by handlers that write to a process stream.
pub trait LineSink: Send + Sync {
    fn write_line(&self, line: &str) -> std::io::Result<()>;
}

impl<T: LineSink + ?Sized> LineSink for std::sync::Arc<T> {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        (**self).write_line(line)
    }
}

impl<T: LineSink + ?Sized> LineSink for Box<T> {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        (**self).write_line(line)
    }
}
