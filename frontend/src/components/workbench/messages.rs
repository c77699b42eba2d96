use common::error::ImportError;
use common::export::ExportFormat;
use common::model::{ColumnId, Session};

pub enum Msg {
    FileSelected(web_sys::File),
    Imported(Result<Session, ImportError>),
    ToggleVisibility(ColumnId),
    Rename(ColumnId, String),
    RequestExport(ExportFormat),
    ConfirmExport,
    CancelExport,
    SetPage(usize),
    Reset,
}
