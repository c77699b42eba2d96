//! Adapters over the third-party decoders.
//!
//! Both paths produce a [`DecodedSheet`]: the first worksheet as row-major
//! cells, row 0 being the header row. No header interpretation happens here.

use crate::config::ImportOptions;
use crate::error::Result;
use crate::model::CellValue;

mod delimited;
mod workbook;

pub use delimited::sniff_delimiter;

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Container format of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// CSV and other delimiter-separated text. `tab` forces a tab delimiter.
    Delimited { tab: bool },
    Xlsx,
    Xlsb,
    Xls,
    Ods,
}

impl SourceFormat {
    /// Picks a format from the file extension, falling back to magic bytes.
    ///
    /// Unknown files without a recognizable signature are treated as delimited text.
    pub fn detect(file_name: &str, bytes: &[u8]) -> Self {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "txt" => SourceFormat::Delimited { tab: false },
            "tsv" | "tab" => SourceFormat::Delimited { tab: true },
            "xlsx" | "xlsm" => SourceFormat::Xlsx,
            "xlsb" => SourceFormat::Xlsb,
            "xls" => SourceFormat::Xls,
            "ods" => SourceFormat::Ods,
            _ if bytes.starts_with(ZIP_MAGIC) => SourceFormat::Xlsx,
            _ if bytes.starts_with(OLE_MAGIC) => SourceFormat::Xls,
            _ => SourceFormat::Delimited { tab: false },
        }
    }

    pub fn is_workbook(&self) -> bool {
        !matches!(self, SourceFormat::Delimited { .. })
    }
}

/// Decoder output: the first sheet, row-major.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedSheet {
    pub rows: Vec<Vec<CellValue>>,
}

impl DecodedSheet {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Convenience constructor for text-only sheets.
    pub fn from_text<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| CellValue::Text(cell.into())).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decodes `bytes` as `format`, reading only the first worksheet of workbooks.
pub fn decode(bytes: &[u8], format: SourceFormat, options: &ImportOptions) -> Result<DecodedSheet> {
    let sheet = match format {
        SourceFormat::Delimited { tab } => {
            let options = if tab {
                options.clone().with_delimiter(b'\t')
            } else {
                options.clone()
            };
            delimited::decode(bytes, &options)?
        }
        SourceFormat::Xlsx => workbook::decode_xlsx(bytes)?,
        SourceFormat::Xlsb => workbook::decode_xlsb(bytes)?,
        SourceFormat::Xls => workbook::decode_xls(bytes)?,
        SourceFormat::Ods => workbook::decode_ods(bytes)?,
    };

    log::debug!(
        "decoded {:?}: {} rows, widest {} cells",
        format,
        sheet.rows.len(),
        sheet.rows.iter().map(Vec::len).max().unwrap_or(0)
    );
    Ok(sheet)
}
