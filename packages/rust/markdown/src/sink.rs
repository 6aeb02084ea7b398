//! Output sinks for generated wiki pages.
//!
//! The caller picks one of two capabilities explicitly:
//! - [`RawSink`] writes text verbatim (titles, back-links, prose).
//! - [`TableSink`] renders every write as one cell of a fixed-width table and
//!   closes rows automatically.

use std::io::{self, Write};

use docwiki_shared::{DocWikiError, Result};

use crate::{heading, table_frame};

/// Cell delimiter written before every cell.
const CELL_OPEN: &str = " | ";

/// Terminator written after the last cell of a row.
const ROW_CLOSE: &str = " |\n";

// ---------------------------------------------------------------------------
// RawSink
// ---------------------------------------------------------------------------

/// Destination that accumulates Markdown fragments byte for byte.
#[derive(Debug)]
pub struct RawSink<W: Write> {
    inner: W,
}

impl<W: Write> RawSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write `text` with no framing.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

// ---------------------------------------------------------------------------
// TableSink
// ---------------------------------------------------------------------------

/// Table-aware sink: owns one [`RawSink`] and tracks the current column.
///
/// `current_column` is always in `[0, columns)`. Every [`write_cell`] emits
/// exactly one delimited cell, and exactly one row terminator when the row
/// is complete. Cell text is passed through unescaped.
///
/// [`write_cell`]: TableSink::write_cell
#[derive(Debug)]
pub struct TableSink<W: Write> {
    raw: RawSink<W>,
    columns: usize,
    current_column: usize,
}

impl<W: Write> TableSink<W> {
    /// Wrap `raw` in a table of `columns` columns. Zero columns is rejected.
    pub fn new(raw: RawSink<W>, columns: usize) -> Result<Self> {
        if columns == 0 {
            return Err(DocWikiError::validation("table column count must be at least 1"));
        }
        Ok(Self {
            raw,
            columns,
            current_column: 0,
        })
    }

    pub fn current_column(&self) -> usize {
        self.current_column
    }

    /// Write one table cell, closing the row when it is the last column.
    pub fn write_cell(&mut self, text: &str) -> io::Result<()> {
        let mut cell = String::with_capacity(CELL_OPEN.len() + text.len() + ROW_CLOSE.len());
        cell.push_str(CELL_OPEN);
        cell.push_str(text);

        if self.current_column >= self.columns - 1 {
            self.current_column = 0;
            cell.push_str(ROW_CLOSE);
        } else {
            self.current_column += 1;
        }

        self.raw.write_raw(&cell)
    }

    /// Write the two-line header/separator frame that opens a table.
    ///
    /// Does not touch `current_column`; call it only at a row boundary.
    pub fn write_table_header(&mut self) -> io::Result<()> {
        self.raw.write_raw(&table_frame(self.columns))
    }

    /// Write `text` verbatim, outside any table cell.
    pub fn write_header(&mut self, text: &str) -> io::Result<()> {
        self.raw.write_raw(text)
    }

    /// Start a new titled section: close any open row, write `# title`, then
    /// a fresh table frame.
    pub fn start_section(&mut self, title: &str) -> io::Result<()> {
        if self.current_column != 0 {
            self.current_column = 0;
            self.raw.write_raw(ROW_CLOSE)?;
        }
        self.raw.write_raw(&heading(title))?;
        self.write_table_header()
    }

    /// Access the raw capability of this sink.
    pub fn raw(&mut self) -> &mut RawSink<W> {
        &mut self.raw
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.raw.finish()
    }
}
