//! Export Remapper.
//!
//! Rows stay keyed by column identity until this point. Here the visible
//! columns are re-keyed by their current header text and serialized.
//!
//! Two visible columns sharing a header collide: the later column's value
//! wins, while the key keeps the position of its first occurrence. This
//! mirrors insertion-ordered object semantics and is deliberately not
//! prevented.

use crate::error::ExportError;
use crate::model::{CellValue, Column, Row};
use csv::{Terminator, WriterBuilder};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Byte-order mark prepended to CSV output so spreadsheet applications pick UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

const PROCESSED_SUFFIX: &str = "_processed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json;charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

/// One output row: header text to value, in first-insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    fn set(&mut self, key: &str, value: CellValue) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Whether any visible column still shows the `EMPTY` sentinel.
///
/// Callers confirm with the user before exporting when this holds.
pub fn has_unresolved_empty_headers(columns: &[Column]) -> bool {
    columns.iter().any(|c| c.is_visible() && c.is_unresolved())
}

/// Distinct headers of the visible columns, in column order.
pub fn export_headers(columns: &[Column]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for column in columns.iter().filter(|c| c.is_visible()) {
        if !headers.iter().any(|h| h == column.current_header()) {
            headers.push(column.current_header().to_string());
        }
    }
    headers
}

/// Re-keys every row by the current header of each visible column.
pub fn remap(columns: &[Column], rows: &[Row]) -> Vec<Record> {
    let visible: Vec<&Column> = columns.iter().filter(|c| c.is_visible()).collect();
    rows.iter()
        .map(|row| {
            let mut record = Record::default();
            for column in &visible {
                record.set(column.current_header(), row.get(column.id()).clone());
            }
            record
        })
        .collect()
}

/// Pretty-printed JSON array of records. Absent cells are `null`.
pub fn to_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// BOM-prefixed CSV: a header line, then one line per record.
///
/// Lines are joined with `\n` and the last line has no terminator.
pub fn to_csv(headers: &[String], records: &[Record]) -> Result<String, ExportError> {
    let mut out = String::from(UTF8_BOM);
    if headers.is_empty() {
        return Ok(out);
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(headers.iter().map(|header| {
            record
                .get(header)
                .map(ToString::to_string)
                .unwrap_or_default()
        }))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))?;
    out.push_str(body.strip_suffix('\n').unwrap_or(&body));
    Ok(out)
}

/// Filters, remaps and serializes the table in `format`.
pub fn export(columns: &[Column], rows: &[Row], format: ExportFormat) -> Result<String, ExportError> {
    let records = remap(columns, rows);
    let content = match format {
        ExportFormat::Json => to_json(&records)?,
        ExportFormat::Csv => to_csv(&export_headers(columns), &records)?,
    };
    log::info!(
        "exported {} records as {} ({} bytes)",
        records.len(),
        format,
        content.len()
    );
    Ok(content)
}

/// `<stem>_processed.<ext>` where `stem` drops the last extension of `source`.
///
/// Names without an extension, or whose only dot is leading, are kept whole.
pub fn download_file_name(source: &str, format: ExportFormat) -> String {
    let stem = match source.rfind('.') {
        Some(idx) if idx > 0 => &source[..idx],
        _ => source,
    };
    format!("{}{}.{}", stem, PROCESSED_SUFFIX, format.extension())
}
