//! Report sinks
//!
//! A sink is an ordered append log for report text. Sinks never truncate
//! what is already there; a failed append is fatal for the pass.

use crate::error::{AuditError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Destination for rendered report text
pub trait ReportSink {
    /// Append text after everything written so far
    fn append(&mut self, text: &str) -> Result<()>;
}

/// In-memory sink
impl ReportSink for String {
    fn append(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }
}

/// Sink over any [`Write`], flushed after every append
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    target: String,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer; `target` names it in error messages
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer,
            target: target.into(),
        }
    }

    /// Name of the destination
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn append(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| AuditError::sink(self.target.clone(), e))
    }
}

/// File sink opened in append mode
pub type FileSink = WriterSink<File>;

impl FileSink {
    /// Open `path` for appending, creating it if missing
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AuditError::sink(path.display().to_string(), e))?;
        log::debug!("Appending report to {}", path.display());
        Ok(Self::new(file, path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_string_sink_appends_in_order() {
        let mut sink = String::from("existing\n");
        sink.append("a\n").unwrap();
        sink.append("b\n").unwrap();
        assert_eq!(sink, "existing\na\nb\n");
    }

    #[test]
    fn test_writer_sink_collects_bytes() {
        let mut sink = WriterSink::new(Vec::new(), "buffer");
        sink.append("one ").unwrap();
        sink.append("two").unwrap();
        assert_eq!(sink.target(), "buffer");
        assert_eq!(sink.into_inner(), b"one two");
    }

    #[test]
    fn test_write_failure_is_sink_error() {
        let mut sink = WriterSink::new(BrokenWriter, "pipe");
        let err = sink.append("text").unwrap_err();
        assert!(err.is_sink_failure());
        assert!(err.to_string().contains("pipe"));
    }

    #[test]
    fn test_file_sink_does_not_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "previous\n").unwrap();

        let mut sink = FileSink::open(&path).unwrap();
        sink.append("next\n").unwrap();
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous\nnext\n");
    }

    #[test]
    fn test_file_sink_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        let err = FileSink::open(&path).unwrap_err();
        assert!(err.is_sink_failure());
    }
}
