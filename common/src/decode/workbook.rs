use crate::error::{ImportError, Result};
use crate::model::CellValue;
use calamine::{open_workbook_from_rs, Data, ExcelDateTime, Ods, Range, Reader, Xls, Xlsb, Xlsx};
use chrono::{NaiveTime, Timelike};
use std::io::{Cursor, Read, Seek};

use super::DecodedSheet;

pub(super) fn decode_xlsx(bytes: &[u8]) -> Result<DecodedSheet> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    first_sheet(&mut workbook)
}

pub(super) fn decode_xlsb(bytes: &[u8]) -> Result<DecodedSheet> {
    let mut workbook: Xlsb<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    first_sheet(&mut workbook)
}

pub(super) fn decode_xls(bytes: &[u8]) -> Result<DecodedSheet> {
    let mut workbook: Xls<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    first_sheet(&mut workbook)
}

pub(super) fn decode_ods(bytes: &[u8]) -> Result<DecodedSheet> {
    let mut workbook: Ods<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    first_sheet(&mut workbook)
}

fn first_sheet<RS, R>(workbook: &mut R) -> Result<DecodedSheet>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Into<ImportError>,
{
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::Decode("workbook has no worksheets".to_string()))?
        .map_err(Into::<ImportError>::into)?;
    Ok(sheet_from_range(&range))
}

fn sheet_from_range(range: &Range<Data>) -> DecodedSheet {
    let (height, width) = range.get_size();
    log::debug!("first worksheet spans {}x{} cells", height, width);
    DecodedSheet::new(
        range
            .rows()
            .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
            .map(|row| row.iter().map(cell_value).collect())
            .collect(),
    )
}

/// Blank workbook cells read as empty text, like blank fields of delimited input.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Text(String::new()),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(d) => CellValue::Text(date_text(d)),
        other => CellValue::Text(other.to_string()),
    }
}

/// ISO 8601 text for date cells; midnight values print as a bare date and
/// durations as `h:mm:ss`.
fn date_text(value: &ExcelDateTime) -> String {
    if value.is_duration() {
        if let Some(duration) = value.as_duration() {
            let secs = duration.num_seconds();
            let sign = if secs < 0 { "-" } else { "" };
            let secs = secs.unsigned_abs();
            return format!("{}{}:{:02}:{:02}", sign, secs / 3600, secs / 60 % 60, secs % 60);
        }
    } else if let Some(datetime) = value.as_datetime() {
        return if datetime.time() == NaiveTime::MIN {
            datetime.format("%Y-%m-%d").to_string()
        } else if datetime.nanosecond() == 0 {
            datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            datetime.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
        };
    }
    value.as_f64().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{ExcelDateTime as XlsxDateTime, Format, Workbook};

    fn xlsx_bytes(build: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        build(worksheet);
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_typed_cells_from_first_sheet() {
        let bytes = xlsx_bytes(|sheet| {
            sheet.write_string(0, 0, "Name").unwrap();
            sheet.write_string(0, 1, "Age").unwrap();
            sheet.write_string(0, 2, "Member").unwrap();
            sheet.write_string(1, 0, "Alice").unwrap();
            sheet.write_number(1, 1, 30.0).unwrap();
            sheet.write_boolean(1, 2, true).unwrap();
        });

        let sheet = decode_xlsx(&bytes).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][0], CellValue::from("Name"));
        assert_eq!(sheet.rows[1][1], CellValue::Number(30.0));
        assert_eq!(sheet.rows[1][2], CellValue::Bool(true));
    }

    #[test]
    fn date_cells_read_as_iso_text() {
        let bytes = xlsx_bytes(|sheet| {
            let date = XlsxDateTime::from_ymd(2024, 1, 15).unwrap();
            let stamp = date.clone().and_hms(10, 30, 0).unwrap();
            let span = XlsxDateTime::from_hms(1, 5, 9).unwrap();
            sheet.write_string(0, 0, "When").unwrap();
            sheet.write_string(0, 1, "Stamp").unwrap();
            sheet.write_string(0, 2, "Took").unwrap();
            sheet
                .write_datetime_with_format(1, 0, &date, &Format::new().set_num_format("yyyy-mm-dd"))
                .unwrap();
            sheet
                .write_datetime_with_format(1, 1, &stamp, &Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"))
                .unwrap();
            sheet
                .write_datetime_with_format(1, 2, &span, &Format::new().set_num_format("[h]:mm:ss"))
                .unwrap();
        });

        let sheet = decode_xlsx(&bytes).unwrap();
        assert_eq!(sheet.rows[1], vec![
            CellValue::from("2024-01-15"),
            CellValue::from("2024-01-15T10:30:00"),
            CellValue::from("1:05:09"),
        ]);
    }

    #[test]
    fn fully_blank_rows_are_skipped() {
        let bytes = xlsx_bytes(|sheet| {
            sheet.write_string(0, 0, "A").unwrap();
            sheet.write_string(0, 1, "B").unwrap();
            sheet.write_string(2, 0, "3").unwrap();
        });

        let sheet = decode_xlsx(&bytes).unwrap();
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[1][0], CellValue::from("3"));
    }

    #[test]
    fn gaps_inside_the_range_are_blank_text() {
        let bytes = xlsx_bytes(|sheet| {
            sheet.write_string(0, 0, "A").unwrap();
            sheet.write_string(0, 2, "C").unwrap();
            sheet.write_string(1, 0, "1").unwrap();
        });

        let sheet = decode_xlsx(&bytes).unwrap();
        assert_eq!(sheet.rows[0], vec![
            CellValue::from("A"),
            CellValue::from(""),
            CellValue::from("C"),
        ]);
        assert_eq!(sheet.rows[1].len(), 3);
        assert_eq!(sheet.rows[1][2], CellValue::from(""));
    }

    #[test]
    fn only_the_first_sheet_is_read() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet().write_string(0, 0, "first").unwrap();
        workbook.add_worksheet().write_string(0, 0, "second").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let sheet = decode_xlsx(&bytes).unwrap();
        assert_eq!(sheet.rows, vec![vec![CellValue::from("first")]]);
    }

    #[test]
    fn blank_worksheet_has_no_rows() {
        let bytes = xlsx_bytes(|_| {});
        let sheet = decode_xlsx(&bytes).unwrap();
        assert!(sheet.is_empty());
    }
}
