use super::{CellValue, ColumnId};
use std::collections::HashMap;

/// One data row, keyed by column identity.
///
/// Rows are built once by the importer and only read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: HashMap<ColumnId, CellValue>,
}

impl Row {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, id: ColumnId, value: CellValue) {
        self.cells.insert(id, value);
    }

    /// Value stored for `id`; unknown identities read as [`CellValue::Absent`].
    pub fn get(&self, id: ColumnId) -> &CellValue {
        static ABSENT: CellValue = CellValue::Absent;
        self.cells.get(&id).unwrap_or(&ABSENT)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
