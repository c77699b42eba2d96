//! View rendering for the workbench.
//!
//! Upload step: intro, last import error, spinner or the drop zone.
//! Edit step: column sidebar next to the paginated preview, plus the export
//! confirmation sheet.

use super::dialogs::confirm::confirm_export_dialog;
use super::messages::Msg;
use super::state::Workbench;
use crate::components::preview::{DataPreview, SharedRows};
use crate::components::sidebar::Sidebar;
use crate::components::upload::FileUpload;
use common::model::{ColumnId, Step};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &Workbench, ctx: &Context<Workbench>) -> Html {
    let link = ctx.link();

    html! {
        <div class="workbench-root">
            { build_header(component, link) }
            <main class="workbench-main">
                {
                    match component.workspace.step() {
                        Step::Upload => build_upload_step(component, link),
                        Step::Edit => build_edit_step(component, link),
                    }
                }
            </main>
        </div>
    }
}

fn build_header(component: &Workbench, link: &Scope<Workbench>) -> Html {
    let session = component.workspace.session();
    html! {
        <header class="workbench-header">
            <div class="brand">
                <i class="material-icons">{"auto_awesome"}</i>
                <h1>{"DataPrep"}</h1>
            </div>
            {
                if let Some(session) = session {
                    html! {
                        <div class="header-actions">
                            <span class="file-chip" title={session.file_name().to_string()}>
                                <i class="material-icons">{"storage"}</i>
                                { session.file_name() }
                            </span>
                            <button class="btn link" onclick={link.callback(|_| Msg::Reset)}>
                                <i class="material-icons">{"arrow_back"}</i>
                                {"Start over"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

fn build_upload_step(component: &Workbench, link: &Scope<Workbench>) -> Html {
    html! {
        <div class="upload-step">
            <div class="intro">
                <h2>{"Prepare your data quickly"}</h2>
                <p>{"Upload an Excel or CSV file to pick columns, rename headers and convert the format."}</p>
            </div>
            {
                if let Some(error) = &component.error {
                    html! {
                        <div class="error-banner"><strong>{"Error: "}</strong>{ error.clone() }</div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if component.loading {
                    html! {
                        <div class="loading">
                            <div class="spin"></div>
                            <p>{"Analyzing data..."}</p>
                        </div>
                    }
                } else {
                    html! { <FileUpload on_file={link.callback(Msg::FileSelected)} /> }
                }
            }
            <div class="feature-grid">
                { feature_card("Automatic headers", "The first row becomes the header. Blank header cells are detected and flagged.") }
                { feature_card("Easy editing", "Keep only the columns you need and rename them in place.") }
                { feature_card("CSV or JSON", "Download the prepared table in either format right away.") }
            </div>
        </div>
    }
}

fn feature_card(title: &str, text: &str) -> Html {
    html! {
        <div class="feature-card">
            <i class="material-icons">{"check_circle"}</i>
            <h3>{ title.to_string() }</h3>
            <p>{ text.to_string() }</p>
        </div>
    }
}

fn build_edit_step(component: &Workbench, link: &Scope<Workbench>) -> Html {
    html! {
        <>
            <Sidebar
                columns={component.workspace.columns()}
                on_toggle={link.callback(Msg::ToggleVisibility)}
                on_rename={link.callback(|(id, text): (ColumnId, String)| Msg::Rename(id, text))}
                on_download={link.callback(Msg::RequestExport)}
            />
            <DataPreview
                columns={component.workspace.columns()}
                rows={SharedRows(component.workspace.rows())}
                page={component.page}
                page_size={component.config.preview_page_size}
                on_page={link.callback(Msg::SetPage)}
            />
            { confirm_export_dialog(component, link) }
        </>
    }
}
