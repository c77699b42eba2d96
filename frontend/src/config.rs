use common::config::AppConfig;

/// Id of the optional `<script type="application/json">` block carrying overrides.
const CONFIG_ELEMENT_ID: &str = "dataprep-config";

/// Reads [`AppConfig`] overrides embedded in the host page.
///
/// A missing or blank block yields the defaults; malformed JSON is an error
/// the caller reports once logging is up.
pub fn load() -> Result<AppConfig, serde_json::Error> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_json::from_str(&text)
}
