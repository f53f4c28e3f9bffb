//! Output serialization for article records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ArticleRecord, Result};

/// Header row of the CSV output.
pub const CSV_HEADER: [&str; 3] = ["Article URL", "Title", "Abstract"];

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// Writes `records` to `path` in the given format, replacing any existing file.
pub fn write_records(records: &[ArticleRecord], path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(records, path),
        OutputFormat::Json => write_json(records, path),
    }
}

/// Writes `records` as CSV to `path`, replacing any existing file.
pub fn write_csv(records: &[ArticleRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(records, file)
}

/// Writes `records` as CSV to any sink.
pub fn write_csv_to<W: Write>(records: &[ArticleRecord], sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.url.as_str(),
            record.title_cell(),
            record.abstract_cell(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `records` as a pretty JSON array to `path`.
pub fn write_json(records: &[ArticleRecord], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
