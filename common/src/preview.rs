use crate::model::{Column, ColumnId, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewHeader {
    pub id: ColumnId,
    pub text: String,
    /// The header still reads `EMPTY` and should be highlighted.
    pub is_unresolved: bool,
}

/// A window of rows rendered for display, visible columns only.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTable {
    pub headers: Vec<PreviewHeader>,
    /// `(row number starting at 1, display cells)`.
    pub rows: Vec<(usize, Vec<String>)>,
    pub offset: usize,
    pub total_rows: usize,
}

impl PreviewTable {
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.rows.len() < self.total_rows
    }
}

/// Renders at most `limit` rows starting at `offset`.
///
/// Offsets past the end yield an empty page rather than an error.
pub fn preview(columns: &[Column], rows: &[Row], offset: usize, limit: usize) -> PreviewTable {
    let visible: Vec<&Column> = columns.iter().filter(|c| c.is_visible()).collect();
    let headers = visible
        .iter()
        .map(|c| PreviewHeader {
            id: c.id(),
            text: c.current_header().to_string(),
            is_unresolved: c.is_unresolved(),
        })
        .collect();

    let page = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(idx, row)| {
            let cells = visible.iter().map(|c| row.get(c.id()).to_string()).collect();
            (idx + 1, cells)
        })
        .collect();

    PreviewTable {
        headers,
        rows: page,
        offset,
        total_rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedSheet;
    use crate::import::normalize;

    fn numbered(count: usize) -> crate::model::Session {
        let mut rows = vec![vec!["n".to_string(), "".to_string()]];
        rows.extend((0..count).map(|i| vec![i.to_string(), format!("v{}", i)]));
        normalize(DecodedSheet::from_text(rows), "n.csv").unwrap()
    }

    #[test]
    fn caps_rows_and_reports_more() {
        let session = numbered(150);
        let table = preview(session.columns(), session.rows(), 0, 100);
        assert_eq!(table.rows.len(), 100);
        assert_eq!(table.total_rows, 150);
        assert!(table.has_more());
        assert!(!table.has_previous());
        assert_eq!(table.rows[0], (1, vec!["0".to_string(), "v0".to_string()]));
    }

    #[test]
    fn last_page_is_partial() {
        let session = numbered(150);
        let table = preview(session.columns(), session.rows(), 100, 100);
        assert_eq!(table.rows.len(), 50);
        assert_eq!(table.rows[0].0, 101);
        assert!(!table.has_more());
        assert!(table.has_previous());
    }

    #[test]
    fn only_visible_columns_are_shown() {
        let session = numbered(1);
        let columns: Vec<Column> = session
            .columns()
            .iter()
            .map(|c| if c.current_header() == "n" { c.with_visibility_toggled() } else { c.clone() })
            .collect();
        let table = preview(&columns, session.rows(), 0, 10);
        assert_eq!(table.headers.len(), 1);
        assert!(table.headers[0].is_unresolved);
        assert_eq!(table.rows[0].1, vec!["v0".to_string()]);
    }

    #[test]
    fn offset_past_the_end_is_empty() {
        let session = numbered(3);
        let table = preview(session.columns(), session.rows(), 10, 10);
        assert!(table.rows.is_empty());
        assert!(!table.has_more());
    }
}
