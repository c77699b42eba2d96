use super::{Column, Row};
use std::rc::Rc;

/// Position in the two-state workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Upload,
    Edit,
}

/// The in-memory state of one imported file.
///
/// Columns and rows sit behind `Rc` so views can hold cheap snapshots. Edits
/// install a new column sequence instead of mutating the shared one, and the
/// rows are never replaced after import.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    columns: Rc<Vec<Column>>,
    rows: Rc<Vec<Row>>,
    file_name: String,
}

impl Session {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, file_name: impl Into<String>) -> Self {
        Self {
            columns: Rc::new(columns),
            rows: Rc::new(rows),
            file_name: file_name.into(),
        }
    }

    pub fn columns(&self) -> &Rc<Vec<Column>> {
        &self.columns
    }

    pub fn rows(&self) -> &Rc<Vec<Row>> {
        &self.rows
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub(crate) fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = Rc::new(columns);
    }
}
