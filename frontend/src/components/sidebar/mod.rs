//! Column list: visibility toggles, header inputs and the export buttons.

use common::export::ExportFormat;
use common::model::{Column, ColumnId};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub columns: Rc<Vec<Column>>,
    pub on_toggle: Callback<ColumnId>,
    pub on_rename: Callback<(ColumnId, String)>,
    pub on_download: Callback<ExportFormat>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sidebar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let visible = props.columns.iter().filter(|c| c.is_visible()).count();

        html! {
            <aside class="sidebar">
                <div class="sidebar-head">
                    <h2>
                        {"Columns"}
                        <span class="count-badge">{ format!("{} / {}", visible, props.columns.len()) }</span>
                    </h2>
                    <p>{"Choose the columns to keep and edit their names."}</p>
                </div>
                <div class="sidebar-list">
                    { for props.columns.iter().map(|column| column_item(column, props)) }
                </div>
                <div class="sidebar-foot">
                    <h3>{"Export"}</h3>
                    <div class="export-buttons">
                        { export_button(ExportFormat::Csv, "btn", &props.on_download) }
                        { export_button(ExportFormat::Json, "btn primary", &props.on_download) }
                    </div>
                </div>
            </aside>
        }
    }
}

fn column_item(column: &Column, props: &SidebarProps) -> Html {
    let id = column.id();
    let on_toggle = props.on_toggle.reform(move |_: MouseEvent| id);
    let on_input = props.on_rename.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (id, input.value())
    });
    let warn = column.is_visible() && column.is_unresolved();
    let original = if column.is_empty_original() {
        "(blank)".to_string()
    } else {
        column.original_header().to_string()
    };

    html! {
        <div key={id.to_string()} class={classes!("column-item", (!column.is_visible()).then_some("hidden-column"))}>
            <div class="column-item-head">
                <button
                    class={classes!("visibility-btn", column.is_visible().then_some("on"))}
                    title={if column.is_visible() { "Hide" } else { "Show" }}
                    onclick={on_toggle}
                >
                    <i class="material-icons">{ if column.is_visible() { "visibility" } else { "visibility_off" } }</i>
                </button>
                <span class="original-label">{"Original:"}</span>
                <span class="original-value" title={column.original_header().to_string()}>{ original }</span>
            </div>
            <div class="rename-field">
                <input
                    type="text"
                    class={classes!("rename-input", column.is_unresolved().then_some("unresolved"))}
                    value={column.current_header().to_string()}
                    placeholder="Column name"
                    disabled={!column.is_visible()}
                    oninput={on_input}
                />
                {
                    if warn {
                        html! { <i class="material-icons warn-icon" title="Please enter a name">{"error_outline"}</i> }
                    } else {
                        html! { <i class="material-icons edit-icon">{"edit"}</i> }
                    }
                }
            </div>
        </div>
    }
}

fn export_button(format: ExportFormat, class: &'static str, on_download: &Callback<ExportFormat>) -> Html {
    html! {
        <button class={class} onclick={on_download.reform(move |_: MouseEvent| format)}>
            { format!("Save {}", format) }
        </button>
    }
}
