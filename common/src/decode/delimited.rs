use crate::config::ImportOptions;
use crate::error::Result;
use crate::model::CellValue;
use csv::ReaderBuilder;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;

use super::DecodedSheet;

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

pub(super) fn decode(bytes: &[u8], options: &ImportOptions) -> Result<DecodedSheet> {
    let text = decode_text(bytes, &options.fallback_encoding);
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| sniff_delimiter(text.lines().next().unwrap_or_default()));
    log::debug!("reading delimited text with delimiter {:?}", delimiter as char);

    // Blank lines yield no record, matching blank workbook rows.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(CellValue::from).collect());
    }
    Ok(DecodedSheet::new(rows))
}

/// Decodes text honoring a UTF-8/UTF-16 BOM, then plain UTF-8, then the fallback encoding.
fn decode_text<'a>(bytes: &'a [u8], fallback_label: &str) -> Cow<'a, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            log::warn!("{} input contained malformed sequences", encoding.name());
        }
        return text;
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let encoding = Encoding::for_label(fallback_label.as_bytes()).unwrap_or_else(|| {
        log::warn!("unknown fallback encoding {:?}, using windows-1252", fallback_label);
        WINDOWS_1252
    });
    log::info!("input is not UTF-8, decoding as {}", encoding.name());
    let (text, _) = encoding.decode_without_bom_handling(bytes);
    text
}

/// Guesses the delimiter of a header line: the candidate occurring most often
/// outside double quotes wins, comma on ties or when none occurs.
pub fn sniff_delimiter(line: &str) -> u8 {
    let mut counts = [0usize; DELIMITER_CANDIDATES.len()];
    let mut in_quotes = false;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = DELIMITER_CANDIDATES.iter().position(|&d| d == byte) {
            counts[idx] += 1;
        }
    }

    let mut best = 0;
    for idx in 1..counts.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    DELIMITER_CANDIDATES[best]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_rows(sheet: &DecodedSheet) -> Vec<Vec<String>> {
        sheet
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn sniffs_common_delimiters() {
        assert_eq!(sniff_delimiter("a,b,c"), b',');
        assert_eq!(sniff_delimiter("a;b;c"), b';');
        assert_eq!(sniff_delimiter("a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter("a|b|c"), b'|');
        assert_eq!(sniff_delimiter("single"), b',');
        assert_eq!(sniff_delimiter("a,b;c"), b',');
    }

    #[test]
    fn ignores_delimiters_inside_quotes() {
        assert_eq!(sniff_delimiter(r#""x;y;z",b,c"#), b',');
    }

    #[test]
    fn keeps_ragged_rows_and_blank_cells() {
        let sheet = decode(b"Name,,Age\nAlice,x,30\nBob\n", &ImportOptions::default()).unwrap();
        assert_eq!(
            text_rows(&sheet),
            vec![
                vec!["Name", "", "Age"],
                vec!["Alice", "x", "30"],
                vec!["Bob"],
            ]
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        let sheet = decode(b"A,B\r\n1,2\r\n\r\n3,4", &ImportOptions::default()).unwrap();
        assert_eq!(text_rows(&sheet), vec![vec!["A", "B"], vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn cells_stay_text() {
        let sheet = decode(b"n\n30\n", &ImportOptions::default()).unwrap();
        assert_eq!(sheet.rows[1][0], CellValue::Text("30".into()));
    }

    #[test]
    fn quoted_fields_are_unescaped() {
        let sheet = decode(b"a,b\n\"x, y\",\"say \"\"hi\"\"\"\n", &ImportOptions::default()).unwrap();
        assert_eq!(text_rows(&sheet)[1], vec!["x, y", "say \"hi\""]);
    }

    #[test]
    fn strips_utf8_bom() {
        let sheet = decode("\u{feff}이름,나이\n철수,7\n".as_bytes(), &ImportOptions::default()).unwrap();
        assert_eq!(text_rows(&sheet)[0], vec!["이름", "나이"]);
    }

    #[test]
    fn decodes_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "a;b\n1;2\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let sheet = decode(&bytes, &ImportOptions::default()).unwrap();
        assert_eq!(text_rows(&sheet), vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn falls_back_to_configured_encoding() {
        let (bytes, _, _) = encoding_rs::EUC_KR.encode("이름,나이\n");
        let options = ImportOptions::default().with_fallback_encoding("euc-kr");
        let sheet = decode(&bytes, &options).unwrap();
        assert_eq!(text_rows(&sheet)[0], vec!["이름", "나이"]);
    }

    #[test]
    fn latin1_bytes_use_default_fallback() {
        let sheet = decode(b"caf\xe9\n", &ImportOptions::default()).unwrap();
        assert_eq!(text_rows(&sheet)[0], vec!["café"]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        let sheet = decode(b"", &ImportOptions::default()).unwrap();
        assert!(sheet.is_empty());
    }
}
