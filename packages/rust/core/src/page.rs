//! A wiki page being written: a table sink plus the path it is written to.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use docwiki_markdown::{RawSink, TableSink};
use docwiki_shared::{DocWikiError, Result};

use crate::link::{self, LinkToken};

/// An open wiki page.
///
/// I/O errors are reported against the page path. File-backed pages are
/// closed when dropped; [`Page::finish`] flushes and surfaces write errors.
pub struct Page<W: Write> {
    path: PathBuf,
    sink: TableSink<W>,
}

impl Page<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: PathBuf, columns: usize) -> Result<Self> {
        let file = File::create(&path).map_err(|e| DocWikiError::io(&path, e))?;
        let sink = TableSink::new(RawSink::new(BufWriter::new(file)), columns)?;
        Ok(Self { path, sink })
    }
}

impl<W: Write> Page<W> {
    /// Wrap an existing writer; `path` is only used for error context.
    pub fn from_writer(path: impl Into<PathBuf>, writer: W, columns: usize) -> Result<Self> {
        Ok(Self {
            path: path.into(),
            sink: TableSink::new(RawSink::new(writer), columns)?,
        })
    }

    pub fn sink(&self) -> &TableSink<W> {
        &self.sink
    }

    /// Write text outside the table.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.sink
            .raw()
            .write_raw(text)
            .map_err(|e| DocWikiError::io(&self.path, e))
    }

    pub fn write_table_header(&mut self) -> Result<()> {
        self.sink
            .write_table_header()
            .map_err(|e| DocWikiError::io(&self.path, e))
    }

    /// Write a rendered anchor.
    pub fn emit(&mut self, token: &LinkToken) -> Result<()> {
        link::emit(token, &mut self.sink).map_err(|e| DocWikiError::io(&self.path, e))
    }

    /// Flush the page and return its path and writer.
    pub fn finish(self) -> Result<(PathBuf, W)> {
        let Self { path, sink } = self;
        match sink.finish() {
            Ok(writer) => Ok((path, writer)),
            Err(e) => Err(DocWikiError::io(path, e)),
        }
    }
}
