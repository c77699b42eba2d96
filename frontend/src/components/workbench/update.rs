//! Update function for the workbench.
//!
//! Key behaviors
//! - Import: read the selected file asynchronously, decode and normalize it,
//!   then either load the session or keep the upload step with an error.
//! - Column edits go straight to the workspace store.
//! - Export: ask for confirmation while visible headers still read `EMPTY`,
//!   then serialize and hand the text to the download trigger.

use common::error::ImportError;
use common::export::{self, ExportFormat};
use common::import::import_file;
use common::model::Step;
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{format_count, show_toast, trigger_download};
use super::messages::Msg;
use super::state::Workbench;

/// Applies `msg` to `component`; returns whether to re-render.
pub fn update(component: &mut Workbench, ctx: &Context<Workbench>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            if component.loading || component.workspace.step() != Step::Upload {
                log::debug!("ignoring file selection while busy");
                return false;
            }
            component.loading = true;
            component.error = None;

            let options = component.config.import.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let file = gloo_file::File::from(file);
                let name = file.name();
                let result = match read_as_bytes(&file).await {
                    Ok(bytes) => import_file(&name, &bytes, &options),
                    Err(err) => Err(ImportError::Read(err.to_string())),
                };
                link.send_message(Msg::Imported(result));
            });
            true
        }
        Msg::Imported(result) => {
            component.loading = false;
            match result {
                Ok(session) => {
                    show_toast(&format!(
                        "Loaded {} rows from {}.",
                        format_count(session.rows().len()),
                        session.file_name()
                    ));
                    component.workspace.load(session);
                    component.page = 0;
                }
                Err(err) => {
                    log::warn!("import failed: {}", err);
                    component.error = Some(err.to_string());
                }
            }
            true
        }
        Msg::ToggleVisibility(id) => component.workspace.toggle_visibility(id),
        Msg::Rename(id, text) => component.workspace.rename(id, &text),
        Msg::RequestExport(format) => {
            if component.workspace.has_unresolved_empty_headers() {
                component.pending_export = Some(format);
                open_top_sheet(&component.confirm_sheet_ref);
                return true;
            }
            run_export(component, format);
            false
        }
        Msg::ConfirmExport => {
            close_top_sheet(&component.confirm_sheet_ref);
            if let Some(format) = component.pending_export.take() {
                run_export(component, format);
            }
            true
        }
        Msg::CancelExport => {
            close_top_sheet(&component.confirm_sheet_ref);
            component.pending_export = None;
            true
        }
        Msg::SetPage(page) => {
            if component.page == page {
                return false;
            }
            component.page = page;
            true
        }
        Msg::Reset => {
            component.workspace.reset();
            component.error = None;
            component.page = 0;
            component.pending_export = None;
            true
        }
    }
}

fn run_export(component: &Workbench, format: ExportFormat) {
    let Some(session) = component.workspace.session() else {
        return;
    };

    let content = match export::export(session.columns(), session.rows(), format) {
        Ok(content) => content,
        Err(err) => {
            log::error!("export failed: {}", err);
            show_toast(&format!("Export failed: {}", err));
            return;
        }
    };

    let file_name = export::download_file_name(session.file_name(), format);
    match trigger_download(&content, &file_name, format.mime_type()) {
        Ok(()) => show_toast(&format!("Saved {}.", file_name)),
        Err(err) => {
            log::error!("download of {} failed: {:?}", file_name, err);
            show_toast("The download could not be started.");
        }
    }
}
