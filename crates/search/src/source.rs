//! Line sources consumed by ingestion
//!
//! Ingestion only needs "next line" and "end of source". Opening files
//! and decoding bytes live here so the index builder never touches I/O
//! handles directly.

use sift_core::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A named, line-oriented text source
///
/// `next_line` returns `Ok(None)` at end of input. Any read failure is
/// reported as `Error::SourceUnavailable`.
pub trait LineSource {
    /// Identifier recorded on the document built from this source
    fn name(&self) -> &str;

    /// Read the next line, without its `\n` or `\r\n` terminator
    fn next_line(&mut self) -> Result<Option<String>>;
}

// ============================================================================
// ReaderSource
// ============================================================================

/// Line source over any buffered reader
///
/// Lines are split on `\n` and the terminator (`\n` or `\r\n`) is
/// removed, matching `str::lines`. Bytes that are not valid UTF-8 are
/// decoded lossily.
#[derive(Debug)]
pub struct ReaderSource<R> {
    name: String,
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wrap a reader under the given name
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        ReaderSource {
            name: name.into(),
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| Error::source_unavailable(self.name.as_str(), e))?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}

// ============================================================================
// FileSource
// ============================================================================

/// Line source reading a file from disk, named by its path
#[derive(Debug)]
pub struct FileSource {
    inner: ReaderSource<BufReader<File>>,
}

impl FileSource {
    /// Open a file for ingestion
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` naming the path if the file cannot be
    /// opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::source_unavailable(name.as_str(), e))?;
        Ok(FileSource {
            inner: ReaderSource::new(name, BufReader::new(file)),
        })
    }
}

impl LineSource for FileSource {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        self.inner.next_line()
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// Line source over lines already in memory. Never fails.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    lines: std::vec::IntoIter<String>,
}

impl MemorySource {
    /// Create a source from a list of lines
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySource {
            name: name.into(),
            lines: lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }

    /// Create a source from a block of text, split into lines
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines())
    }
}

impl LineSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}
