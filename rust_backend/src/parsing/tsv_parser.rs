use anyhow::{Context, Result};
use csv::{ErrorKind, ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::domain::RawRecord;

/// Header names of the columns the engine reads.
pub const TYPE_COLUMN: &str = "Type";
pub const LAUNCH_DATE_COLUMN: &str = "LDate";
pub const DECAY_DATE_COLUMN: &str = "DDate";
pub const MASS_COLUMN: &str = "Mass";
pub const ORBIT_COLUMN: &str = "OpOrbit";

/// Rows read from a catalog file plus bookkeeping about what was skipped.
#[derive(Debug, Clone, Default)]
pub struct TsvParseResult {
    pub records: Vec<RawRecord>,
    /// Comment lines (first cell starting with `#`) after the header.
    pub comment_rows: usize,
    /// Rows that could not be decoded (e.g. invalid UTF-8).
    pub skipped_rows: usize,
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    object_type: usize,
    launch_date: usize,
    decay_date: usize,
    mass: usize,
    orbit: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .with_context(|| format!("Missing required column '{}'", name))
        };

        Ok(Self {
            object_type: find(TYPE_COLUMN)?,
            launch_date: find(LAUNCH_DATE_COLUMN)?,
            decay_date: find(DECAY_DATE_COLUMN)?,
            mass: find(MASS_COLUMN)?,
            orbit: find(ORBIT_COLUMN)?,
        })
    }

    fn extract(&self, row: &StringRecord) -> RawRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
        RawRecord {
            object_type: cell(self.object_type),
            launch_date_text: cell(self.launch_date),
            decay_date_text: cell(self.decay_date),
            mass: cell(self.mass),
            operational_orbit_code: cell(self.orbit),
        }
    }
}

/// Parse a catalog TSV file into raw records.
pub fn parse_catalog_tsv(path: &Path) -> Result<TsvParseResult> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;
    parse_catalog_reader(file)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse catalog TSV content held in memory.
pub fn parse_catalog_str(content: &str) -> Result<TsvParseResult> {
    parse_catalog_reader(content.as_bytes())
}

/// Parse catalog TSV content from any reader.
///
/// Rows may be ragged; missing trailing cells read as empty.
pub fn parse_catalog_reader<R: Read>(reader: R) -> Result<TsvParseResult> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read header row")?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut result = TsvParseResult::default();

    for (line, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                if let ErrorKind::Io(_) = e.kind() {
                    return Err(e).context("I/O error while reading catalog rows");
                }
                log::warn!("Skipping unreadable catalog row {}: {}", line + 2, e);
                result.skipped_rows += 1;
                continue;
            }
        };

        if row.get(0).map(|c| c.starts_with('#')).unwrap_or(false) {
            result.comment_rows += 1;
            continue;
        }

        result.records.push(columns.extract(&row));
    }

    log::debug!(
        "Parsed {} catalog rows ({} comments, {} skipped)",
        result.records.len(),
        result.comment_rows,
        result.skipped_rows
    );

    Ok(result)
}
