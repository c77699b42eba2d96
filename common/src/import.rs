//! Import Normalizer: decoded sheet to identity-keyed columns and rows.

use crate::config::ImportOptions;
use crate::decode::{self, DecodedSheet, SourceFormat};
use crate::error::{ImportError, Result};
use crate::model::{CellValue, Column, Row, Session};

/// Decodes `bytes` and normalizes the first sheet into a [`Session`].
///
/// The format is detected from `file_name` and the leading bytes. Any failure
/// returns before a session exists.
pub fn import_file(file_name: &str, bytes: &[u8], options: &ImportOptions) -> Result<Session> {
    let format = SourceFormat::detect(file_name, bytes);
    log::info!("importing {} ({} bytes) as {:?}", file_name, bytes.len(), format);
    let sheet = decode::decode(bytes, format, options)?;
    normalize(sheet, file_name)
}

/// Builds the session from an already decoded sheet.
///
/// Row 0 becomes the columns; every later row is keyed by the identity of the
/// column at the same position. Short rows leave [`CellValue::Absent`] for the
/// missing positions, and cells past the header width are dropped.
pub fn normalize(sheet: DecodedSheet, file_name: &str) -> Result<Session> {
    let mut decoded_rows = sheet.rows.into_iter();
    let header = decoded_rows.next().ok_or(ImportError::EmptySheet)?;

    let columns: Vec<Column> = header
        .iter()
        .enumerate()
        .map(|(position, cell)| Column::from_header(position, &cell.to_string()))
        .collect();

    let rows: Vec<Row> = decoded_rows
        .map(|cells| {
            let mut cells = cells.into_iter();
            let mut row = Row::with_capacity(columns.len());
            for column in &columns {
                row.insert(column.id(), cells.next().unwrap_or(CellValue::Absent));
            }
            row
        })
        .collect();

    let empty_headers = columns.iter().filter(|c| c.is_empty_original()).count();
    log::info!(
        "imported {}: {} columns ({} with empty headers), {} rows",
        file_name,
        columns.len(),
        empty_headers,
        rows.len()
    );

    Ok(Session::new(columns, rows, file_name))
}
