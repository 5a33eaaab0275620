// crates/engine/src/assembler.rs
use crate::config::{BUF_SIZE, MAX_LINE};
use std::io::{self, Read};
use std::iter::FusedIterator;

/// One logical line, without its terminating newline.
///
/// Holds at most `MAX_LINE - 1` bytes; anything past that is dropped and only
/// counted in [`Line::truncated`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
    truncated: usize,
}

impl Line {
    pub const CAPACITY: usize = MAX_LINE - 1;

    /// Build a line from raw bytes, applying the same truncation as the assembler.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        let mut line = Self::default();
        line.extend(bytes);
        line
    }

    fn extend(&mut self, bytes: &[u8]) {
        let room = Self::CAPACITY - self.bytes.len();
        let take = bytes.len().min(room);
        self.bytes.extend_from_slice(&bytes[..take]);
        self.truncated += bytes.len() - take;
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// 非空行か（先頭バイトが存在し、改行でない）
    #[must_use]
    pub fn is_nonblank(&self) -> bool {
        self.bytes.first().is_some_and(|&b| b != b'\n')
    }

    /// Number of bytes dropped because the line exceeded its capacity.
    #[must_use]
    pub const fn truncated(&self) -> usize {
        self.truncated
    }
}

/// Splits a byte stream into logical lines, reading `BUF_SIZE` bytes at a time.
///
/// The final fragment is yielded even when the stream does not end with a
/// newline. A read error ends the sequence: a pending partial line is yielded
/// first, then the error.
#[derive(Debug)]
pub struct LineAssembler<R> {
    reader: R,
    chunk: Box<[u8]>,
    pos: usize,
    filled: usize,
    current: Line,
    pending_error: Option<io::Error>,
    bytes_read: u64,
    finished: bool,
}

impl<R: Read> LineAssembler<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: vec![0; BUF_SIZE].into_boxed_slice(),
            pos: 0,
            filled: 0,
            current: Line::default(),
            pending_error: None,
            bytes_read: 0,
            finished: false,
        }
    }

    /// Total bytes pulled from the reader so far.
    #[must_use]
    pub const fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    fn take_current(&mut self) -> Line {
        std::mem::take(&mut self.current)
    }
}

impl<R: Read> Iterator for LineAssembler<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if self.pos < self.filled {
                let avail = &self.chunk[self.pos..self.filled];
                if let Some(i) = memchr::memchr(b'\n', avail) {
                    self.current.extend(&avail[..i]);
                    self.pos += i + 1;
                    return Some(Ok(self.take_current()));
                }
                self.current.extend(avail);
                self.pos = self.filled;
                continue;
            }

            if let Some(err) = self.pending_error.take() {
                self.finished = true;
                return Some(Err(err));
            }

            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.finished = true;
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.take_current()));
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    self.bytes_read += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    if self.current.is_empty() {
                        self.finished = true;
                        return Some(Err(e));
                    }
                    self.pending_error = Some(e);
                    return Some(Ok(self.take_current()));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for LineAssembler<R> {}
