use crate::components::workbench::{Msg, Workbench};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use yew::html::Scope;
use yew::prelude::*;

/// Top sheet asking whether to export while visible headers still read `EMPTY`.
pub fn confirm_export_dialog(component: &Workbench, link: &Scope<Workbench>) -> Html {
    let format = component
        .pending_export
        .map(|f| f.to_string())
        .unwrap_or_default();

    html! {
        <YwMaterialTopSheet node_ref={component.confirm_sheet_ref.clone()}>
            <div class="sheet-backdrop">
                <div class="sheet-card">
                    <h3>{"Unnamed columns"}</h3>
                    <p>
                        {"Some visible columns are still named 'EMPTY'. Download the "}
                        {format}
                        {" file anyway?"}
                    </p>
                    <div class="sheet-actions">
                        <button class="btn" onclick={link.callback(|_| Msg::CancelExport)}>
                            {"Cancel"}
                        </button>
                        <button class="btn primary" onclick={link.callback(|_| Msg::ConfirmExport)}>
                            {"Download anyway"}
                        </button>
                    </div>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}
