use common::config::AppConfig;
use common::export::ExportFormat;
use common::store::Workspace;
use yew::prelude::*;

/// State of the root editor component.
///
/// Fields are `pub` because `update` and `view` live in sibling modules.
pub struct Workbench {
    pub config: AppConfig,

    /// Session store; the only place imported data lives.
    pub workspace: Workspace,

    /// An import is in flight. The upload widget is hidden until it resolves.
    pub loading: bool,

    /// Message of the last failed import, shown on the upload screen.
    pub error: Option<String>,

    /// Zero-based preview page.
    pub page: usize,

    /// Export waiting for the user to confirm unresolved `EMPTY` headers.
    pub pending_export: Option<ExportFormat>,

    pub confirm_sheet_ref: NodeRef,
}

impl Workbench {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            workspace: Workspace::new(),
            loading: false,
            error: None,
            page: 0,
            pending_export: None,
            confirm_sheet_ref: NodeRef::default(),
        }
    }
}
