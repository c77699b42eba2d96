//! Browser-side helpers for the workbench.
//!
//! - **Toasts**: short, self-removing notifications for import and export results.
//! - **Download trigger**: wraps serialized export text in a `Blob` and clicks a
//!   temporary anchor so the browser saves it under the requested name.
//! - **Counts**: thousands-separated numbers for row and column totals.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` at the bottom of the page for a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Saves `content` as a file named `file_name` with the given MIME type.
///
/// The object URL is revoked once the click has been dispatched, and also
/// when placing or clicking the anchor fails.
pub fn trigger_download(content: &str, file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    release_after(click_download_anchor(&document, &body, &url, file_name), || {
        Url::revoke_object_url(&url)
    })
}

/// Runs `release` whatever `outcome` was; the first error wins.
fn release_after<E>(outcome: Result<(), E>, release: impl FnOnce() -> Result<(), E>) -> Result<(), E> {
    let released = release();
    outcome.and(released)
}

fn click_download_anchor(
    document: &Document,
    body: &HtmlElement,
    url: &str,
    file_name: &str,
) -> Result<(), JsValue> {
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn release_runs_when_the_click_fails() {
        let released = Cell::new(false);
        let result = release_after(Err("append failed"), || {
            released.set(true);
            Ok(())
        });
        assert!(released.get());
        assert_eq!(result, Err("append failed"));
    }

    #[test]
    fn release_error_surfaces_after_a_clean_click() {
        assert_eq!(release_after(Ok(()), || Err("revoke failed")), Err("revoke failed"));
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
