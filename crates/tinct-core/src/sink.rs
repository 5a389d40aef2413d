//! # Output Sinks
//!
//! Where rendered lines go.
//!
//! A [`Sink`] receives one complete line per call, without the trailing
//! newline, and is responsible for any synchronization its destination
//! needs. The logger itself holds no lock.
//!
//! | Sink | Destination | Serialization |
//! |---|---|---|
//! | [`StdoutSink`] | process stdout (default) | stdout lock per line |
//! | [`StderrSink`] | process stderr | stderr lock per line |
//! | [`WriterSink`] | any `Write + Send` | internal `Mutex` |
//! | [`MemorySink`] | in-memory `Vec<String>` | internal `Mutex` |

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Line-oriented output destination
pub trait Sink: Send + Sync
{
    /// Append `line` followed by a newline
    ///
    /// ## Errors
    ///
    /// Returns the destination's own I/O error. The logger passes it to the
    /// caller unchanged.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Push any buffered output to the destination
    ///
    /// The default implementation does nothing.
    ///
    /// ## Errors
    ///
    /// Returns the destination's own I/O error.
    fn flush(&self) -> io::Result<()>
    {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S>
{
    fn write_line(&self, line: &str) -> io::Result<()>
    {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()>
    {
        (**self).flush()
    }
}

/// Standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink
{
    fn write_line(&self, line: &str) -> io::Result<()>
    {
        writeln!(io::stdout().lock(), "{line}")
    }

    fn flush(&self) -> io::Result<()>
    {
        io::stdout().flush()
    }
}

/// Standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink
{
    fn write_line(&self, line: &str) -> io::Result<()>
    {
        writeln!(io::stderr().lock(), "{line}")
    }

    fn flush(&self) -> io::Result<()>
    {
        io::stderr().flush()
    }
}

/// Any writer, serialized behind a mutex
///
/// ```rust
/// use std::sync::Arc;
///
/// use tinct_core::{Logger, WriterSink};
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = Logger::new(4, false, false, true, false).with_sink(Arc::clone(&sink));
/// logger.info("to a buffer")?;
///
/// let written = String::from_utf8(sink.with_writer(|buf| buf.clone())).unwrap();
/// assert!(written.ends_with("INFO to a buffer\n"));
/// # Ok::<(), tinct_core::LogError>(())
/// ```
#[derive(Debug, Default)]
pub struct WriterSink<W>
{
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W>
{
    /// Wrap `writer`
    pub fn new(writer: W) -> Self
    {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Run `f` with exclusive access to the underlying writer
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R
    {
        let mut writer = lock(&self.writer);
        f(&mut *writer)
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W
    {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W>
{
    fn write_line(&self, line: &str) -> io::Result<()>
    {
        writeln!(lock(&self.writer), "{line}")
    }

    fn flush(&self) -> io::Result<()>
    {
        lock(&self.writer).flush()
    }
}

/// Keeps every line in memory
///
/// Handy for tests and for hosts that display recent log output themselves.
#[derive(Debug, Default)]
pub struct MemorySink
{
    lines: Mutex<Vec<String>>,
}

impl MemorySink
{
    /// Empty sink
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Copy of every line written so far, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String>
    {
        lock(&self.lines).clone()
    }

    /// Number of lines written so far
    #[must_use]
    pub fn len(&self) -> usize
    {
        lock(&self.lines).len()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        lock(&self.lines).is_empty()
    }

    /// Remove and return every line written so far
    pub fn take(&self) -> Vec<String>
    {
        std::mem::take(&mut *lock(&self.lines))
    }
}

impl Sink for MemorySink
{
    fn write_line(&self, line: &str) -> io::Result<()>
    {
        lock(&self.lines).push(line.to_owned());
        Ok(())
    }
}

// Poisoned means another holder panicked; the buffer itself is intact.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T>
{
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order()
    {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write_line("one").unwrap();
        sink.write_line("two").unwrap();
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.take(), vec!["one", "two"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_writer_sink_appends_newline()
    {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.into_inner(), b"a\nb\n");
    }

    #[test]
    fn test_arc_sink_delegates()
    {
        let inner = Arc::new(MemorySink::new());
        let shared: Arc<dyn Sink> = inner.clone();
        shared.write_line("shared").unwrap();
        assert_eq!(inner.lines(), vec!["shared"]);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe
    {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize>
        {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()>
        {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_surfaces_errors()
    {
        let sink = WriterSink::new(BrokenPipe);
        let err = sink.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
