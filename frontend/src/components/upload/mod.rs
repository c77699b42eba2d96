use web_sys::{DragEvent, Event, FileList, HtmlInputElement};
use yew::prelude::*;

/// Extensions offered by the file picker; anything else dropped in is still attempted.
const ACCEPTED: &str = ".csv,.tsv,.txt,.xlsx,.xlsm,.xlsb,.xls,.ods,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet,application/vnd.ms-excel";

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    /// Receives the first file of a drop or picker selection.
    pub on_file: Callback<web_sys::File>,
}

pub enum Msg {
    Picked(Option<FileList>),
    DragOver(bool),
}

/// Drop zone; the hidden file input is nested in the label so a click opens the picker.
pub struct FileUpload {
    dragging: bool,
}

impl Component for FileUpload {
    type Message = Msg;
    type Properties = FileUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { dragging: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Picked(files) => {
                self.dragging = false;
                if let Some(file) = files.and_then(|list| list.get(0)) {
                    ctx.props().on_file.emit(file);
                }
                true
            }
            Msg::DragOver(dragging) => {
                let changed = self.dragging != dragging;
                self.dragging = dragging;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let ondrop = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::Picked(e.data_transfer().and_then(|dt| dt.files()))
        });
        let ondragover = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::DragOver(true)
        });
        let ondragleave = link.callback(|_: DragEvent| Msg::DragOver(false));
        let onchange = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Picked(input.files())
        });

        html! {
            <div class="upload-zone-wrapper" {ondrop} {ondragover} {ondragleave}>
                <label class={classes!("upload-zone", self.dragging.then_some("dragging"))}>
                    <i class="material-icons upload-icon">{"upload_file"}</i>
                    <p class="upload-title">{"Drag a file here or click to choose one"}</p>
                    <p class="upload-hint">{"Supported formats: .xlsx, .xls, .ods, .csv"}</p>
                    <input
                        id="file-upload"
                        type="file"
                        class="hidden"
                        accept={ACCEPTED}
                        {onchange}
                    />
                </label>
            </div>
        }
    }
}
