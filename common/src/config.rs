//! Runtime settings.
//!
//! Nothing is read from the environment or persisted; the frontend builds an
//! [`AppConfig`] from its defaults at startup. The structs deserialize so a
//! host page can still hand in overrides as JSON.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREVIEW_PAGE_SIZE: usize = 100;
pub const DEFAULT_FALLBACK_ENCODING: &str = "windows-1252";

/// Options handed to the decoders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Field delimiter for delimited text. `None` sniffs it from the first line.
    pub delimiter: Option<u8>,
    /// WHATWG label of the encoding used when delimited text is not valid UTF-8.
    pub fallback_encoding: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
        }
    }
}

impl ImportOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.fallback_encoding = label.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub import: ImportOptions,
    /// Rows shown per preview page.
    pub preview_page_size: usize,
    /// Maximum `log` level forwarded to the browser console.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            import: ImportOptions::default(),
            preview_page_size: DEFAULT_PREVIEW_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"preview_page_size": 25}"#).unwrap();
        assert_eq!(config.preview_page_size, 25);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.import, ImportOptions::default());
    }

    #[test]
    fn builder_overrides_import_options() {
        let options = ImportOptions::default()
            .with_delimiter(b';')
            .with_fallback_encoding("euc-kr");
        assert_eq!(options.delimiter, Some(b';'));
        assert_eq!(options.fallback_encoding, "euc-kr");
    }
}
