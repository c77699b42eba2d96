use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Display text assigned to a column whose source header was blank.
pub const EMPTY_HEADER: &str = "EMPTY";

/// Prefix of the synthetic original header stored for blank source headers.
const EMPTY_ORIGINAL_PREFIX: &str = "EMPTY_";

/// Opaque identity of a logical column.
///
/// Generated once per column at import time and used as the key of every
/// [`Row`](super::Row). Header text is never used for lookups, so renames and
/// duplicate headers cannot collide with stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ColumnId(Uuid);

impl ColumnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColumnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One logical output column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    id: ColumnId,
    original_header: String,
    current_header: String,
    visible: bool,
    is_empty_original: bool,
}

impl Column {
    /// Builds the column found at `position` of the header row.
    ///
    /// `raw_header` is trimmed. A blank result gets the synthetic original
    /// header `EMPTY_<position>` and the display header [`EMPTY_HEADER`].
    pub fn from_header(position: usize, raw_header: &str) -> Self {
        let trimmed = raw_header.trim();
        if trimmed.is_empty() {
            Self {
                id: ColumnId::new(),
                original_header: format!("{}{}", EMPTY_ORIGINAL_PREFIX, position),
                current_header: EMPTY_HEADER.to_string(),
                visible: true,
                is_empty_original: true,
            }
        } else {
            Self {
                id: ColumnId::new(),
                original_header: trimmed.to_string(),
                current_header: trimmed.to_string(),
                visible: true,
                is_empty_original: false,
            }
        }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn original_header(&self) -> &str {
        &self.original_header
    }

    pub fn current_header(&self) -> &str {
        &self.current_header
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_empty_original(&self) -> bool {
        self.is_empty_original
    }

    /// True while the display header is still the `EMPTY` sentinel.
    pub fn is_unresolved(&self) -> bool {
        self.current_header == EMPTY_HEADER
    }

    /// Copy of this column with `visible` flipped.
    pub fn with_visibility_toggled(&self) -> Self {
        Self {
            visible: !self.visible,
            ..self.clone()
        }
    }

    /// Copy of this column with `current_header` replaced verbatim.
    pub fn renamed(&self, text: impl Into<String>) -> Self {
        Self {
            current_header: text.into(),
            ..self.clone()
        }
    }
}
