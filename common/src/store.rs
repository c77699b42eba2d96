//! Column/Row store: the single owner of the current session.
//!
//! The frontend keeps one [`Workspace`] in its root component and changes it
//! only through the operations below. Column edits are copy-on-write: a new
//! column sequence is installed and any `Rc` handed out earlier keeps
//! describing the previous state.

use crate::model::{Column, ColumnId, Row, Session, Step};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    session: Option<Session>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        match self.session {
            Some(_) => Step::Edit,
            None => Step::Upload,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Installs a freshly imported session, replacing any previous one.
    pub fn load(&mut self, session: Session) {
        log::debug!(
            "loading session for {} with {} columns",
            session.file_name(),
            session.columns().len()
        );
        self.session = Some(session);
    }

    /// Drops the session and returns to the upload step.
    pub fn reset(&mut self) {
        self.session = None;
    }

    /// Flips the visibility of the column `id`. Unknown ids are ignored.
    pub fn toggle_visibility(&mut self, id: ColumnId) -> bool {
        self.replace_column(id, Column::with_visibility_toggled)
    }

    /// Sets the display header of column `id` verbatim. Unknown ids are ignored.
    ///
    /// Empty and duplicate headers are accepted; they are only surfaced at export.
    pub fn rename(&mut self, id: ColumnId, text: &str) -> bool {
        self.replace_column(id, |column| column.renamed(text))
    }

    pub fn columns(&self) -> Rc<Vec<Column>> {
        self.session
            .as_ref()
            .map(|s| Rc::clone(s.columns()))
            .unwrap_or_default()
    }

    pub fn rows(&self) -> Rc<Vec<Row>> {
        self.session
            .as_ref()
            .map(|s| Rc::clone(s.rows()))
            .unwrap_or_default()
    }

    pub fn visible_count(&self) -> usize {
        self.session
            .as_ref()
            .map(|s| s.columns().iter().filter(|c| c.is_visible()).count())
            .unwrap_or(0)
    }

    /// True when a visible column still carries the `EMPTY` header.
    pub fn has_unresolved_empty_headers(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| crate::export::has_unresolved_empty_headers(s.columns()))
    }

    /// Returns whether a column matched and the sequence was replaced.
    fn replace_column(&mut self, id: ColumnId, edit: impl FnOnce(&Column) -> Column) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(position) = session.columns().iter().position(|c| c.id() == id) else {
            log::warn!("ignoring edit for unknown column {}", id);
            return false;
        };

        let mut columns = Vec::clone(session.columns());
        columns[position] = edit(&columns[position]);
        session.replace_columns(columns);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedSheet;
    use crate::import::normalize;

    fn loaded() -> Workspace {
        let sheet = DecodedSheet::from_text([vec!["A", "B"], vec!["1", "2"]]);
        let mut workspace = Workspace::new();
        workspace.load(normalize(sheet, "ab.csv").unwrap());
        workspace
    }

    #[test]
    fn starts_in_upload_without_session() {
        let workspace = Workspace::new();
        assert_eq!(workspace.step(), Step::Upload);
        assert!(workspace.session().is_none());
        assert!(workspace.columns().is_empty());
        assert_eq!(workspace.visible_count(), 0);
    }

    #[test]
    fn load_moves_to_edit_and_reset_returns() {
        let mut workspace = loaded();
        assert_eq!(workspace.step(), Step::Edit);
        workspace.reset();
        assert_eq!(workspace.step(), Step::Upload);
        assert!(workspace.rows().is_empty());
    }

    #[test]
    fn toggling_twice_restores_visibility() {
        let mut workspace = loaded();
        let id = workspace.columns()[1].id();

        assert!(workspace.toggle_visibility(id));
        assert!(!workspace.columns()[1].is_visible());
        assert_eq!(workspace.visible_count(), 1);

        workspace.toggle_visibility(id);
        assert!(workspace.columns()[1].is_visible());
        assert_eq!(workspace.visible_count(), 2);
    }

    #[test]
    fn rename_is_idempotent() {
        let mut workspace = loaded();
        let id = workspace.columns()[0].id();

        workspace.rename(id, "Alpha");
        let once = workspace.clone();
        workspace.rename(id, "Alpha");
        assert_eq!(workspace, once);
        assert_eq!(workspace.columns()[0].current_header(), "Alpha");
    }

    #[test]
    fn edits_replace_the_column_sequence() {
        let mut workspace = loaded();
        let before = workspace.columns();
        let rows_before = workspace.rows();
        let id = before[0].id();

        workspace.rename(id, "");
        let after = workspace.columns();

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(before[0].current_header(), "A");
        assert_eq!(after[0].current_header(), "");
        assert_eq!(before[1], after[1]);
        assert!(Rc::ptr_eq(&rows_before, &workspace.rows()));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut workspace = loaded();
        let before = workspace.columns();
        assert!(!workspace.toggle_visibility(ColumnId::new()));
        assert!(!workspace.rename(ColumnId::new(), "x"));
        assert!(Rc::ptr_eq(&before, &workspace.columns()));
    }

    #[test]
    fn unresolved_headers_only_count_when_visible() {
        let sheet = DecodedSheet::from_text([vec!["A", ""]]);
        let mut workspace = Workspace::new();
        workspace.load(normalize(sheet, "x.csv").unwrap());
        assert!(workspace.has_unresolved_empty_headers());

        let id = workspace.columns()[1].id();
        workspace.toggle_visibility(id);
        assert!(!workspace.has_unresolved_empty_headers());

        workspace.toggle_visibility(id);
        workspace.rename(id, "Code");
        assert!(!workspace.has_unresolved_empty_headers());
    }
}
