//! Append-only destination for discovered URLs

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes one canonical URL per line, flushing after every record
///
/// Nothing is buffered across records, so an interrupted crawl leaves a
/// usable file containing every URL discovered up to that point.
#[derive(Debug)]
pub struct LinkSink<W: Write> {
    writer: W,
}

impl LinkSink<File> {
    /// Creates (or truncates) the link file at `path`
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> LinkSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Appends a URL record and flushes it
    pub fn append(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", url)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
