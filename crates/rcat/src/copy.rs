use std::fmt;
use std::io::{Read, Write};

const COPY_BUF_LEN: usize = 64 * 1024;

/// A copy failure, split by which side of the pump broke.
///
/// The caller's policy differs per side: a reader that dies mid-stream is a
/// per-input failure (skip it, keep going), while a writer failure means
/// standard output itself is gone and the run cannot continue.
#[derive(Debug)]
pub enum CopyError {
    Read(std::io::Error),
    Write(std::io::Error),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::Read(err) => write!(f, "read: {err}"),
            CopyError::Write(err) => write!(f, "write: {err}"),
        }
    }
}

impl std::error::Error for CopyError {}

/// The shared output sink for all inputs of a run.
pub struct Output<W: Write> {
    writer: W,
    flush_each_write: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, flush_each_write: bool) -> Self {
        Output {
            writer,
            flush_each_write,
        }
    }

    /// Drain `reader` to EOF, writing every chunk through immediately.
    ///
    /// Copies in fixed-size chunks so arbitrarily large inputs never pull
    /// more than one buffer's worth into memory. Returns the byte count
    /// forwarded.
    pub fn copy_from(&mut self, reader: &mut impl Read) -> Result<u64, CopyError> {
        let mut buf = [0u8; COPY_BUF_LEN];
        let mut total = 0u64;
        loop {
            let n = reader.read(&mut buf).map_err(CopyError::Read)?;
            if n == 0 {
                break;
            }
            self.writer.write_all(&buf[..n]).map_err(CopyError::Write)?;
            if self.flush_each_write {
                self.writer.flush().map_err(CopyError::Write)?;
            }
            total += n as u64;
        }
        Ok(total)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer
    }
}
