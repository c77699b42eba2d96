use crate::components::workbench::helpers::format_count;
use common::model::{Column, Row};
use common::preview::preview;
use std::rc::Rc;
use yew::prelude::*;

/// Row storage compared by pointer: rows never change after import, so a new
/// `Rc` is the only signal worth re-rendering for.
#[derive(Clone)]
pub struct SharedRows(pub Rc<Vec<Row>>);

impl PartialEq for SharedRows {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct DataPreviewProps {
    pub columns: Rc<Vec<Column>>,
    pub rows: SharedRows,
    pub page: usize,
    pub page_size: usize,
    pub on_page: Callback<usize>,
}

/// Table of the visible columns, one page of rows at a time.
pub struct DataPreview;

impl Component for DataPreview {
    type Message = ();
    type Properties = DataPreviewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataPreview
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let page_size = props.page_size.max(1);
        let table = preview(&props.columns, &props.rows.0, props.page * page_size, page_size);

        if table.headers.is_empty() {
            return html! {
                <div class="preview-empty">
                    <p>{"No columns selected. Pick columns in the sidebar."}</p>
                </div>
            };
        }

        let page = props.page;
        let previous = props.on_page.reform(move |_: MouseEvent| page.saturating_sub(1));
        let next = props.on_page.reform(move |_: MouseEvent| page + 1);

        html! {
            <div class="preview">
                <table class="preview-table">
                    <thead>
                        <tr>
                            <th class="row-number">{"#"}</th>
                            {
                                for table.headers.iter().map(|header| html! {
                                    <th key={header.id.to_string()} class={classes!(header.is_unresolved.then_some("unresolved"))}>
                                        { header.text.clone() }
                                    </th>
                                })
                            }
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for table.rows.iter().map(|(number, cells)| html! {
                                <tr key={*number}>
                                    <td class="row-number">{ *number }</td>
                                    { for cells.iter().map(|cell| html! { <td title={cell.clone()}>{ cell.clone() }</td> }) }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
                {
                    if table.has_previous() || table.has_more() {
                        html! {
                            <div class="preview-footer">
                                <button class="btn" disabled={!table.has_previous()} onclick={previous}>{"Previous"}</button>
                                <span>
                                    { format!(
                                        "Rows {}–{} of {}. The download always includes every row.",
                                        format_count(table.offset + 1),
                                        format_count(table.offset + table.rows.len()),
                                        format_count(table.total_rows)
                                    ) }
                                </span>
                                <button class="btn" disabled={!table.has_more()} onclick={next}>{"Next"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_rows_compare_by_pointer() {
        let rows = Rc::new(vec![Row::default()]);
        let same = SharedRows(Rc::clone(&rows));
        let copy = SharedRows(Rc::new(vec![Row::default()]));
        assert!(SharedRows(rows) == same);
        assert!(same != copy);
    }
}
