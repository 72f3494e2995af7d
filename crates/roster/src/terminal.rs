//! Line-oriented terminal shared by the command loop and the prompt.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct TerminalIo<R, W> {
    input: R,
    output: W,
}

/// One buffered input and one output behind a shared handle.
///
/// Every line of input, commands and confirmation answers alike, is read
/// through the same reader, so nothing buffered for one reader is lost to
/// another. Clones share the same streams. The lock is held only for a
/// single read or write.
#[derive(Debug)]
pub struct Terminal<R, W> {
    io: Arc<Mutex<TerminalIo<R, W>>>,
}

impl<R, W> Clone for Terminal<R, W> {
    fn clone(&self) -> Self {
        Self {
            io: self.io.clone(),
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Arc::new(Mutex::new(TerminalIo { input, output })),
        }
    }

    /// Reads one line, without its line ending. `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.lock().input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes formatted text and flushes.
    pub fn print(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut io = self.lock();
        io.output.write_fmt(args)?;
        io.output.flush()
    }

    /// Returns the output stream once every other handle is gone.
    pub fn into_output(self) -> Option<W> {
        let io = Arc::try_unwrap(self.io).ok()?;
        Some(io.into_inner().unwrap_or_else(PoisonError::into_inner).output)
    }

    fn lock(&self) -> MutexGuard<'_, TerminalIo<R, W>> {
        self.io.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
