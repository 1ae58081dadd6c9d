use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A row of a tabular report with a fixed header.
pub trait ReportRow {
    /// Column titles, in cell order.
    const HEADER: &'static [&'static str];

    /// Renders the row as string cells matching [`ReportRow::HEADER`].
    fn cells(&self) -> Vec<String>;
}

/// Destination for ordered rows of string cells.
pub trait TabularSink {
    fn write_record(&mut self, cells: &[String]) -> Result<(), ReportError>;

    /// Flushes any buffered output. Called once after the last row.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Writes the header of `R` followed by every row, then finishes the sink.
///
/// The header is written even when `rows` is empty.
pub fn write_report<R: ReportRow, S: TabularSink + ?Sized>(
    rows: &[R],
    sink: &mut S,
) -> Result<(), ReportError> {
    let header: Vec<String> = R::HEADER.iter().map(|title| title.to_string()).collect();
    sink.write_record(&header)?;
    for row in rows {
        sink.write_record(&row.cells())?;
    }
    sink.finish()
}

/// CSV-backed sink.
pub struct CsvSink<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_delimiter(writer, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(writer: W, delimiter: u8) -> Self {
        Self {
            writer: WriterBuilder::new()
                .delimiter(delimiter)
                .flexible(false)
                .from_writer(writer),
        }
    }

    /// Finishes the CSV stream and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Io(io::Error::new(e.error().kind(), e.error().to_string())))
    }
}

impl CsvSink<File> {
    pub fn create<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, ReportError> {
        let file = File::create(path)?;
        Ok(Self::with_delimiter(file, delimiter))
    }
}

impl<W: Write> TabularSink for CsvSink<W> {
    fn write_record(&mut self, cells: &[String]) -> Result<(), ReportError> {
        self.writer.write_record(cells)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink keeping every record in memory, header included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub records: Vec<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabularSink for MemorySink {
    fn write_record(&mut self, cells: &[String]) -> Result<(), ReportError> {
        self.records.push(cells.to_vec());
        Ok(())
    }
}
